use shared::constants::COUNTER_CLICKED_EVENT;
use yew::prelude::*;

use crate::{analytics, styles};

#[function_component(App)]
pub fn app() -> Html {
    let count = use_state(|| 0u32);

    let onclick = {
        let count = count.clone();
        Callback::from(move |_: MouseEvent| {
            count.set(*count + 1);
            analytics::capture(COUNTER_CLICKED_EVENT);
        })
    };

    html! {
        <main class={styles::CONTAINER}>
            <h1 class={styles::TEXT_H1}>{"Beacon"}</h1>
            <button class={styles::BUTTON_COUNTER} {onclick}>
                { format!("count is {}", *count) }
            </button>
            <p class={styles::TEXT_BODY}>
                {"Page views, page leaves and exceptions are captured automatically."}
            </p>
        </main>
    }
}
