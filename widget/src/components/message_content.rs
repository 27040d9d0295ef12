//! Body renderer for one transcript entry.
//!
//! DESIGN
//! ======
//! Rendering is an exhaustive match on [`MessageBody`], so adding a message
//! kind fails to compile until it has a renderer. Clicks are reported upward
//! as the clicked button or chip; this module never mutates the transcript.

use leptos::prelude::*;

use crate::model::message::{ButtonAction, Card, CarouselCard, MessageBody, MessageButton, SuggestionChip};

/// Kind-specific body of a message bubble.
#[component]
pub fn MessageContent(
    body: MessageBody,
    on_button: Callback<MessageButton>,
    on_chip: Callback<SuggestionChip>,
) -> impl IntoView {
    match body {
        MessageBody::Text { text } => view! { <div class="message__text">{text}</div> }.into_any(),
        MessageBody::TextWithButton { text, buttons } => view! {
            <div class="message__text">{text}</div>
            <ButtonRow block="message" buttons=buttons on_button=on_button />
        }
        .into_any(),
        MessageBody::Card(card) => view! { <CardView card=card on_button=on_button /> }.into_any(),
        MessageBody::Carousel { cards } => view! { <Carousel cards=cards on_button=on_button /> }.into_any(),
        MessageBody::SuggestionChips { text, chips } => view! {
            {text.map(|text| view! { <div class="message__text">{text}</div> })}
            <div class="suggestion-chips">
                {chips
                    .into_iter()
                    .map(|chip| {
                        let label = chip.label.clone();
                        view! {
                            <button
                                class="suggestion-chip"
                                type="button"
                                on:click=move |_| on_chip.run(chip.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    }
}

/// Buttons under a text, card, or carousel entry. `block` is the BEM block
/// the row belongs to.
#[component]
fn ButtonRow(block: &'static str, buttons: Vec<MessageButton>, on_button: Callback<MessageButton>) -> impl IntoView {
    if buttons.is_empty() {
        return ().into_any();
    }
    view! {
        <div class=format!("{block}__buttons")>
            {buttons
                .into_iter()
                .map(|button| {
                    let class = button_class(block, button.action);
                    let label = button.label.clone();
                    view! {
                        <button class=class type="button" on:click=move |_| on_button.run(button.clone())>
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

fn button_class(block: &str, action: ButtonAction) -> String {
    match action {
        ButtonAction::Postback => format!("{block}__button"),
        ButtonAction::Url => format!("{block}__button {block}__button--url"),
    }
}

#[component]
fn CardView(card: Card, on_button: Callback<MessageButton>) -> impl IntoView {
    let Card {
        title,
        subtitle,
        image_url,
        buttons,
    } = card;
    let alt = title.clone();
    view! {
        <div class="message-card">
            {image_url.map(|src| view! { <img class="message-card__image" src=src alt=alt /> })}
            <div class="message-card__body">
                <h4 class="message-card__title">{title}</h4>
                {subtitle.map(|text| view! { <p class="message-card__subtitle">{text}</p> })}
                <ButtonRow block="message-card" buttons=buttons on_button=on_button />
            </div>
        </div>
    }
}

#[component]
fn Carousel(cards: Vec<CarouselCard>, on_button: Callback<MessageButton>) -> impl IntoView {
    view! {
        <div class="message-carousel">
            <div class="message-carousel__track">
                {cards
                    .into_iter()
                    .map(|entry| {
                        let Card {
                            title,
                            subtitle,
                            image_url,
                            buttons,
                        } = entry.card;
                        let alt = title.clone();
                        view! {
                            <div class="carousel-card" data-card-id=entry.id>
                                {image_url.map(|src| view! { <img class="carousel-card__image" src=src alt=alt /> })}
                                <div class="carousel-card__body">
                                    <h5 class="carousel-card__title">{title}</h5>
                                    {subtitle.map(|text| view! { <p class="carousel-card__subtitle">{text}</p> })}
                                    <ButtonRow block="carousel-card" buttons=buttons on_button=on_button />
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
