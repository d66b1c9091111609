use yew::prelude::*;
use yew_drag::{DragEvent, DragState, UseDragProps, use_drag};

const HANDLE_PX: f64 = 48.0;

#[derive(Properties, PartialEq, Clone)]
pub struct DragPadProps {
    #[prop_or(320.0)]
    pub size: f64,
    /// Resting position of the handle after each completed drag.
    #[prop_or_default]
    pub on_drop: Callback<(f64, f64)>,
}

fn within(v: f64, limit: f64) -> bool {
    (0.0..=limit).contains(&v)
}

#[function_component(DragPad)]
pub fn drag_pad(props: &DragPadProps) -> Html {
    let rest = use_state(|| (0.0_f64, 0.0_f64));
    let limit = props.size - HANDLE_PX;

    // Keep the handle inside the pad by vetoing moves that would leave it.
    let on_drag_move = {
        let (rx, ry) = *rest;
        Callback::from(move |(_, state): (DragEvent, DragState)| {
            let (dx, dy) = state.offset().unwrap_or_default();
            within(rx + dx, limit) && within(ry + dy, limit)
        })
    };
    let on_drag_end = {
        let rest = rest.clone();
        let on_drop = props.on_drop.clone();
        Callback::from(move |(_, state): (DragEvent, DragState)| {
            if let Some((dx, dy)) = state.offset() {
                let dropped = (rest.0 + dx, rest.1 + dy);
                rest.set(dropped);
                on_drop.emit(dropped);
            }
        })
    };
    let drag = use_drag(UseDragProps {
        on_drag_move: Some(on_drag_move),
        on_drag_end: Some(on_drag_end),
        ..Default::default()
    });

    let (dx, dy) = drag.state.offset().unwrap_or_default();
    let (x, y) = (rest.0 + dx, rest.1 + dy);
    let snapshot = serde_json::to_string(&drag.state).unwrap_or_default();
    let border = if drag.is_dragging() { "#58a6ff" } else { "#30363d" };

    html! {<div style="display:flex; flex-direction:column; gap:8px;">
        <div style={format!("position:relative; width:{0}px; height:{0}px; background:#161b22; border:1px solid {1}; border-radius:8px; touch-action:none;", props.size, border)}>
            <div
                onmousedown={drag.on_mouse_down.clone()}
                onmousemove={drag.on_mouse_move.clone()}
                onmouseup={drag.on_mouse_up.clone()}
                ontouchstart={drag.on_touch_start.clone()}
                ontouchmove={drag.on_touch_move.clone()}
                ontouchend={drag.on_touch_end.clone()}
                ontouchcancel={drag.on_touch_cancel.clone()}
                style={format!("position:absolute; left:{x}px; top:{y}px; width:{HANDLE_PX}px; height:{HANDLE_PX}px; background:#238636; border-radius:6px; cursor:grab; user-select:none;")}
            />
        </div>
        <code style="font-size:12px; color:#8b949e;">{ snapshot }</code>
    </div>}
}
