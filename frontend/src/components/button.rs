use leptos::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown button {kind}: `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonType {
    #[default]
    Normal,
    Transparent,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Normal => "normal",
            ButtonType::Transparent => "transparent",
        }
    }
}

impl FromStr for ButtonType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(ButtonType::Normal),
            "transparent" => Ok(ButtonType::Transparent),
            other => Err(UnknownVariant {
                kind: "type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonColor {
    #[default]
    Green,
    White,
    /// Green label on a transparent background.
    GreenText,
}

impl ButtonColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonColor::Green => "green",
            ButtonColor::White => "white",
            ButtonColor::GreenText => "green-text",
        }
    }
}

impl FromStr for ButtonColor {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(ButtonColor::Green),
            "white" => Ok(ButtonColor::White),
            "green-text" => Ok(ButtonColor::GreenText),
            other => Err(UnknownVariant {
                kind: "color",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ButtonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn button_classes(kind: ButtonType, color: ButtonColor, extra: &str) -> String {
    let base = format!("btn btn--{} btn--{}", kind.as_str(), color.as_str());
    let extra = extra.trim();
    if extra.is_empty() {
        base
    } else {
        format!("{} {}", base, extra)
    }
}

/// Shared button. Styling lives in the stylesheet under the `btn--*` modifiers.
#[component]
pub fn Button(
    #[prop(optional)] kind: ButtonType,
    #[prop(optional)] color: ButtonColor,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let classes = button_classes(kind, color, &class);
    view! {
        <button type="button" class=classes disabled=move || disabled.get()>
            {children()}
        </button>
    }
}
