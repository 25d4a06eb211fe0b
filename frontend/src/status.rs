use yew::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum StatusKind {
    #[default]
    Neutral,
    Success,
    Error,
}

/// Renderable state of the per-panel status line.
#[derive(Clone, PartialEq, Default)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn neutral(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Neutral,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }

    fn class(&self) -> &'static str {
        match self.kind {
            StatusKind::Neutral => "status",
            StatusKind::Success => "status success",
            StatusKind::Error => "status error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusLineProps {
    pub status: Status,
}

#[function_component]
pub fn StatusLine(props: &StatusLineProps) -> Html {
    html! {
        <div class={props.status.class()}>{ &props.status.text }</div>
    }
}
