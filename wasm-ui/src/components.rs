//! UI components for the feed page.

use p2p_feed::{Endpoint, FeedMessage, MediaKind, MediaVariant, Offers, Sender, Viewer};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Top navigation bar with the signed-in viewer.
#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub viewer: Viewer,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let viewer = &props.viewer;
    html! {
        <nav class="navbar navbar-light bg-light px-3 w-100">
            <span class="navbar-brand">{ "P2P Marketplace" }</span>
            <div class="navbar-viewer d-flex align-items-center">
                <img class="rounded-circle me-2" src={viewer.image.clone()} alt={viewer.username.clone()} width="40" height="40" />
                <div class="viewer-names">
                    <div class="viewer-name">{ &viewer.full_name }</div>
                    <div class="viewer-handle text-muted">{ format!("@{}", viewer.username) }</div>
                </div>
            </div>
        </nav>
    }
}

/// Selector for the message to display.
#[derive(Properties, PartialEq)]
pub struct OffersBarProps {
    pub offers: Offers,
    pub selected: i64,
    pub on_change: Callback<i64>,
}

/// Value the `<select>` should show: the selected id, or the placeholder.
fn select_value(offers: &Offers, selected: i64) -> String {
    if offers.contains(selected) {
        selected.to_string()
    } else {
        String::new()
    }
}

#[function_component(OffersBar)]
pub fn offers_bar(props: &OffersBarProps) -> Html {
    let select_ref = use_node_ref();

    // Option `selected` attributes only set the initial choice; the live
    // value has to be written to the element.
    {
        let select_ref = select_ref.clone();
        let value = select_value(&props.offers, props.selected);
        use_effect_with(value, move |value| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value(value);
            }
            || ()
        });
    }

    let on_select = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(id) = target.value().parse::<i64>() {
                on_change.emit(id);
            }
        })
    };

    // Commit on change rather than on every keystroke
    let on_id_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlInputElement = e.target_unchecked_into();
            if let Ok(id) = target.value().trim().parse::<i64>() {
                on_change.emit(id);
            }
        })
    };

    let step_button = |label: &'static str, class: &'static str, target: Option<i64>| {
        let on_change = props.on_change.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            if let Some(id) = target {
                on_change.emit(id);
            }
        });
        html! {
            <button class={classes!("btn", "btn-outline-secondary", class)} disabled={target.is_none()} {onclick}>
                { label }
            </button>
        }
    };

    let selected = props.selected;
    let known = props.offers.contains(selected);
    let placeholder = if props.offers.is_empty() {
        "No offers"
    } else {
        "Pick an offer"
    };

    html! {
        <div class="offers-bar d-flex gap-2 mb-3">
            { step_button("\u{2039} Prev", "offers-prev", props.offers.prev_before(selected)) }
            <select ref={select_ref} class="form-select offers-select" onchange={on_select} disabled={props.offers.is_empty()}>
                if !known {
                    <option value="" selected={true} disabled={true}>{ placeholder }</option>
                }
                { for props.offers.ids().iter().map(|&id| html! {
                    <option value={id.to_string()} selected={id == selected}>
                        { format!("Offer #{id}") }
                    </option>
                })}
            </select>
            { step_button("Next \u{203A}", "offers-next", props.offers.next_after(selected)) }
            <input
                type="number"
                class="form-control offers-id"
                value={selected.to_string()}
                onchange={on_id_input}
                title="Message id"
            />
        </div>
    }
}

/// Card showing the selected message.
#[derive(Properties, PartialEq)]
pub struct FeedProps {
    pub message: FeedMessage,
    pub endpoint: Endpoint,
    pub loading: bool,
}

#[function_component(Feed)]
pub fn feed(props: &FeedProps) -> Html {
    let msg = &props.message;

    let body = if msg.is_empty() {
        html! { <p class="feed-empty text-muted">{ "No message to show." }</p> }
    } else {
        let author = msg
            .sender
            .as_ref()
            .map(Sender::display_name)
            .unwrap_or_else(|| "Unknown".to_string());
        let handle = msg.sender.as_ref().and_then(Sender::handle);

        let media = match (msg.id, &msg.media) {
            (Some(id), Some(media)) => {
                let thumb = props.endpoint.media_url(id, MediaVariant::Thumb);
                let full = props.endpoint.media_url(id, MediaVariant::Photo);
                let label = match media.kind {
                    MediaKind::Photo => "photo",
                    MediaKind::Video => "video",
                };
                html! {
                    <a class="feed-media" href={full} target="_blank">
                        <img class="img-fluid rounded" src={thumb} alt={label} />
                    </a>
                }
            }
            _ => html! {},
        };

        html! {
            <>
                <div class="feed-header d-flex justify-content-between">
                    <div>
                        <strong class="feed-author">{ author }</strong>
                        if let Some(handle) = handle {
                            <span class="feed-handle text-muted ms-2">{ handle }</span>
                        }
                    </div>
                    if let Some(posted) = msg.posted_label() {
                        <small class="feed-date text-muted">{ posted }</small>
                    }
                </div>
                if let Some(text) = &msg.text {
                    <p class="feed-text" style="white-space: pre-wrap;">{ text }</p>
                }
                { media }
                <div class="feed-footer d-flex gap-3 mt-2">
                    { for msg.reactions.iter().map(|r| html! {
                        <span class="feed-reaction">{ format!("{} {}", r.emoji, r.count) }</span>
                    })}
                    if let Some(views) = msg.views {
                        <span class="feed-views text-muted ms-auto">{ format!("{views} views") }</span>
                    }
                </div>
            </>
        }
    };

    html! {
        <div class={classes!("card", "feed", props.loading.then_some("feed-loading"))}>
            <div class="card-body">
                if props.loading {
                    <div class="feed-spinner text-muted small">{ "Loading\u{2026}" }</div>
                }
                { body }
            </div>
        </div>
    }
}

/// Panel describing the sender of the selected message.
#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub sender: Option<Sender>,
}

#[function_component(Profile)]
pub fn profile(props: &ProfileProps) -> Html {
    let Some(sender) = &props.sender else {
        return html! {
            <div class="card profile">
                <div class="card-body text-muted">{ "No sender" }</div>
            </div>
        };
    };

    html! {
        <div class="card profile">
            <div class="card-body">
                <h5 class="profile-name">{ sender.display_name() }</h5>
                if let Some(handle) = sender.handle() {
                    <div class="profile-handle text-muted">{ handle }</div>
                }
                <dl class="profile-details mt-3 mb-0">
                    if let Some(status) = &sender.status {
                        <dt>{ "Status" }</dt>
                        <dd>{ status.to_lowercase() }</dd>
                    }
                    if let Some(seen) = &sender.last_online_date {
                        <dt>{ "Last online" }</dt>
                        <dd>{ seen }</dd>
                    }
                    if sender.is_deleted {
                        <dd class="text-danger">{ "Deleted account" }</dd>
                    }
                </dl>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_value_tracks_known_id() {
        let offers = Offers::new([10, 20, 30]);
        assert_eq!(select_value(&offers, 20), "20");
        assert_eq!(select_value(&offers, 30), "30");
    }

    #[test]
    fn test_select_value_falls_back_to_placeholder() {
        let offers = Offers::new([10, 20]);
        assert_eq!(select_value(&offers, 15), "");
        assert_eq!(select_value(&Offers::default(), 0), "");
    }
}
