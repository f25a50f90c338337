//! Browser state context, hash routing, and fetch dispatch.

use std::rc::Rc;

use api::DataClient;
use dioxus::prelude::*;
use futures::channel::mpsc::{unbounded, UnboundedSender};
use futures::StreamExt;
use store::{BrowserState, DataSourceConfig, ViewRoute};

use crate::platform;

/// Get the browser state. Views re-render when it is written.
pub fn use_browser() -> Signal<BrowserState> {
    use_context::<Signal<BrowserState>>()
}

pub fn use_dispatcher() -> Dispatcher {
    use_context::<Dispatcher>()
}

/// Queues navigations for the dispatch task.
#[derive(Clone)]
pub struct Dispatcher {
    tx: UnboundedSender<ViewRoute>,
}

impl Dispatcher {
    pub fn dispatch(&self, route: ViewRoute) {
        if self.tx.unbounded_send(route).is_err() {
            tracing::warn!("dispatch task has stopped");
        }
    }

    /// Re-run the dispatch for the current location hash.
    pub fn retry(&self) {
        self.dispatch(ViewRoute::from_hash(&platform::current_hash()));
    }
}

/// Provider component that owns the browser state and routes hash changes.
/// Wrap the app with this component.
#[component]
pub fn BrowserProvider(config: DataSourceConfig, children: Element) -> Element {
    let mut state = use_context_provider(|| Signal::new(BrowserState::new()));

    let dispatcher = use_hook(|| {
        let client = DataClient::new(&config);
        let (tx, mut rx) = unbounded::<ViewRoute>();

        // Fetches run concurrently; BrowserState::finish drops superseded ones.
        spawn(async move {
            while let Some(route) = rx.next().await {
                let Some(ticket) = state.write().begin(route.clone()) else {
                    continue;
                };
                let client = client.clone();
                spawn(async move {
                    let outcome = api::load_view(&client, &route).await;
                    state.write().finish(ticket, outcome);
                });
            }
        });

        Dispatcher { tx }
    });
    use_context_provider(|| dispatcher.clone());

    let _listener = use_hook(|| {
        let dispatcher = dispatcher.clone();
        let listener = platform::HashListener::install(move |hash| {
            dispatcher.dispatch(ViewRoute::from_hash(&hash));
            platform::scroll_to_top();
        });
        Rc::new(listener)
    });

    use_hook(|| dispatcher.retry());

    rsx! {
        {children}
    }
}
