use super::drag_pad::DragPad;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let drops = use_state(|| 0u32);
    let last = use_state(|| None::<(f64, f64)>);

    let on_drop = {
        let drops = drops.clone();
        let last = last.clone();
        Callback::from(move |(x, y): (f64, f64)| {
            log::info!("handle dropped at ({x:.0}, {y:.0})");
            drops.set(*drops + 1);
            last.set(Some((x, y)));
        })
    };

    html! {
        <div id="root" style="padding:12px; color:#c9d1d9; background:#0e1116; min-height:100vh;">
            <h2>{"Drag the handle"}</h2>
            <DragPad on_drop={on_drop} />
            <p>{ format!("drops: {}", *drops) }</p>
            {
                match *last {
                    Some((x, y)) => html! { <p>{ format!("resting at ({x:.0}, {y:.0})") }</p> },
                    None => html! {},
                }
            }
        </div>
    }
}
