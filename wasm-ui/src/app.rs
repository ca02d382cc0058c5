//! Main application component.

use gloo::console;
use p2p_feed::FeedConfig;
use p2p_feed::config::{
    KEY_API_URL, KEY_CHAT, KEY_INITIAL_MSG_ID, KEY_VIEWER_IMAGE, KEY_VIEWER_NAME,
    KEY_VIEWER_USERNAME,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::{Feed, Navbar, OffersBar, Profile};
use crate::state::{FeedAction, FeedState};

/// Settings captured when the bundle was built.
fn compiled_setting(key: &str) -> Option<String> {
    let value = match key {
        KEY_API_URL => option_env!("P2PSTORE_API_URL"),
        KEY_CHAT => option_env!("P2PSTORE_CHAT"),
        KEY_INITIAL_MSG_ID => option_env!("P2PSTORE_INITIAL_MSG_ID"),
        KEY_VIEWER_USERNAME => option_env!("P2PSTORE_VIEWER_USERNAME"),
        KEY_VIEWER_NAME => option_env!("P2PSTORE_VIEWER_NAME"),
        KEY_VIEWER_IMAGE => option_env!("P2PSTORE_VIEWER_IMAGE"),
        _ => None,
    };
    value.map(str::to_string)
}

fn load_config() -> FeedConfig {
    FeedConfig::from_lookup(compiled_setting).unwrap_or_else(|e| {
        console::error!(format!("{e}; using default settings"));
        FeedConfig::default()
    })
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let state = {
        let initial = config.initial_msg_id;
        use_reducer(move || FeedState::new(initial))
    };

    // Offers are listed once
    {
        let dispatcher = state.dispatcher();
        let endpoint = config.endpoint.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_offers(&endpoint).await {
                    Ok(offers) => dispatcher.dispatch(FeedAction::OffersLoaded(offers)),
                    Err(e) => console::error!(format!("offers: {e}")),
                }
            });
            || ()
        });
    }

    // One GET per selection; failures are logged and the prior card stays
    {
        let dispatcher = state.dispatcher();
        let endpoint = config.endpoint.clone();
        use_effect_with(
            (state.msg_id, state.generation),
            move |&(msg_id, generation)| {
                spawn_local(async move {
                    match api::fetch_message(&endpoint, msg_id).await {
                        Ok(message) => {
                            console::log!(format!("message {msg_id}"), format!("{message:?}"));
                            dispatcher.dispatch(FeedAction::Loaded {
                                generation,
                                message,
                            });
                        }
                        Err(e) => {
                            console::error!(format!("message {msg_id}: {e}"));
                            dispatcher.dispatch(FeedAction::Failed { generation });
                        }
                    }
                });
                || ()
            },
        );
    }

    let on_msg_id_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: i64| {
            console::log!("msgId", id.to_string());
            dispatcher.dispatch(FeedAction::Select(id));
        })
    };

    html! {
        <div class="app container-fluid">
            <div class="row">
                <Navbar viewer={config.viewer.clone()} />
            </div>

            <div class="row main mt-4">
                <div class="col-md-6 offset-md-2">
                    <OffersBar
                        offers={state.offers.clone()}
                        selected={state.msg_id}
                        on_change={on_msg_id_change}
                    />
                    <Feed
                        message={state.message.clone()}
                        endpoint={config.endpoint.clone()}
                        loading={state.loading}
                    />
                </div>
                <div class="col-md-3">
                    <Profile sender={state.sender.clone()} />
                </div>
            </div>

            <footer class="footer text-muted small mt-4">
                <span class="footer-build">
                    { format!("Build: {} {}", env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                </span>
            </footer>
        </div>
    }
}
