use yew::prelude::*;

mod chat;
mod rating;
mod rpc;
mod status;

use chat::ChatPanel;
use rating::RatingPanel;

#[function_component]
fn App() -> Html {
    html! {
        <div class="page">
            <h1>{ "Restaurant Intelligence Demos" }</h1>
            <ChatPanel />
            <RatingPanel />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
