use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use dinegpt::dispatch::{self, SEARCH_ROUTE};
use dinegpt::{build_chat_request, ConversationState};
use shared::SearchPayload;

use crate::rpc::Client;
use crate::status::{Status, StatusLine};

#[derive(Clone, PartialEq)]
struct ChatLine {
    role: &'static str,
    text: String,
}

#[derive(Default, PartialEq)]
struct Transcript {
    lines: Vec<ChatLine>,
}

enum TranscriptAction {
    Push(ChatLine),
}

// Overlapping submissions append through the reducer so a late response never
// clobbers lines rendered after it was dispatched.
impl Reducible for Transcript {
    type Action = TranscriptAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TranscriptAction::Push(line) => {
                let mut lines = self.lines.clone();
                lines.push(line);
                Rc::new(Self { lines })
            }
        }
    }
}

#[function_component]
pub fn ChatPanel() -> Html {
    let textarea_ref = use_node_ref();
    let transcript = use_reducer(Transcript::default);
    let conversation = use_mut_ref(ConversationState::new);
    let filters = use_state(|| Option::<String>::None);
    let status = use_state(Status::default);

    let onclick = {
        let textarea_ref = textarea_ref.clone();
        let transcript = transcript.clone();
        let conversation = conversation.clone();
        let filters = filters.clone();
        let status = status.clone();

        move |_| {
            let textarea = match textarea_ref.cast::<HtmlTextAreaElement>() {
                Some(el) => el,
                None => return,
            };
            let question = textarea.value();
            let question = question.trim().to_string();
            if question.is_empty() {
                return;
            }
            textarea.set_value("");

            let conversation_id = conversation.borrow_mut().get_or_create();
            let request = match build_chat_request(&question, conversation_id) {
                Ok(request) => request,
                Err(_) => return,
            };

            transcript.dispatch(TranscriptAction::Push(ChatLine {
                role: "user",
                text: question,
            }));
            status.set(Status::neutral("Thinking..."));

            let transcript = transcript.clone();
            let filters = filters.clone();
            let status = status.clone();
            spawn_local(async move {
                match dispatch::submit::<_, _, SearchPayload>(&Client, SEARCH_ROUTE, &request)
                    .await
                {
                    Ok(envelope) => {
                        let answer = if envelope.data.answer.is_empty() {
                            "No answer returned.".to_string()
                        } else {
                            envelope.data.answer
                        };
                        transcript.dispatch(TranscriptAction::Push(ChatLine {
                            role: "ai",
                            text: answer,
                        }));

                        let applied = envelope.data.applied_filters.unwrap_or_default();
                        filters.set(Some(
                            serde_json::to_string_pretty(&applied).unwrap_or_default(),
                        ));
                        status.set(Status::success(format!(
                            "Trace ID: {} · Latency: {}ms",
                            envelope.trace_id, envelope.latency_ms
                        )));
                    }
                    Err(err) => {
                        transcript.dispatch(TranscriptAction::Push(ChatLine {
                            role: "ai",
                            text: format!("Error: {err}"),
                        }));
                        status.set(Status::error(format!("Request failed: {err}")));
                    }
                }
            });
        }
    };

    html! {
        <section class="chat-panel">
            <h2>{ "Restaurant Search Assistant" }</h2>
            <div class="chat-log">
                { for transcript.lines.iter().map(|line| html! {
                    <div class={classes!("chat-message", line.role)}>
                        <div class="label">{ if line.role == "user" { "You" } else { "AI" } }</div>
                        <div class="bubble">{ &line.text }</div>
                    </div>
                }) }
            </div>
            <textarea ref={textarea_ref} placeholder="Ask about restaurants" rows=4 cols=50 />
            <br />
            <button {onclick}>{ "Submit" }</button>
            <StatusLine status={(*status).clone()} />
            if let Some(filters) = filters.as_ref() {
                <pre class="filter-box">{ filters }</pre>
            }
        </section>
    }
}
