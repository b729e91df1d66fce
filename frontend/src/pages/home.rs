use crate::{
    assets,
    components::button::{Button, ButtonColor, ButtonType},
};
use leptos::*;

pub const GREETING: &str = "Добро пожаловать в musicRitmo!";
pub const LOGO_ALT: &str = "Логотип musicRitmo";
pub const BUTTON_LABEL: &str = "вход";
pub const HEART_ICON_CLASS: &str = "fa-regular fa-heart";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonSpec {
    pub kind: ButtonType,
    pub color: ButtonColor,
    /// `None` leaves the prop unset.
    pub disabled: Option<bool>,
}

pub const HOME_BUTTONS: [ButtonSpec; 3] = [
    ButtonSpec {
        kind: ButtonType::Normal,
        color: ButtonColor::Green,
        disabled: Some(true),
    },
    ButtonSpec {
        kind: ButtonType::Normal,
        color: ButtonColor::White,
        disabled: Some(true),
    },
    ButtonSpec {
        kind: ButtonType::Transparent,
        color: ButtonColor::GreenText,
        disabled: None,
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let logo = assets::LOGO;
    view! {
        <div class="home-page">
            <h1>{GREETING}</h1>
            <h2>{GREETING}</h2>
            <p>{GREETING}</p>
            <img
                src={logo.path}
                alt=LOGO_ALT
                width={logo.width.to_string()}
                height={logo.height.to_string()}
            />
            <i class=HEART_ICON_CLASS></i>
            {HOME_BUTTONS
                .into_iter()
                .map(|spec| {
                    view! {
                        <Button
                            kind={spec.kind}
                            color={spec.color}
                            disabled={spec.disabled.unwrap_or_default()}
                        >
                            {BUTTON_LABEL}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}
