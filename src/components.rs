//! Pure Yew view components for the sorting visualizer UI.
//!
//! These components render from props only; all state lives in the session
//! owned by the root component.

use crate::config::SLIDER_STEP;
use log::warn;
use sort_visualizer::Algorithm;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Dropdown listing the five variants.
#[derive(Properties, PartialEq)]
pub struct AlgorithmSelectProps {
    pub selected: Algorithm,
    pub disabled: bool,
    pub onchange: Callback<Algorithm>,
}

#[function_component(AlgorithmSelect)]
pub fn algorithm_select(props: &AlgorithmSelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Algorithm>() {
                Ok(alg) => onchange.emit(alg),
                Err(err) => warn!("{}", err),
            }
        })
    };

    html! {
        <select class="algorithm-select" disabled={props.disabled} {onchange}>
            { Algorithm::ALL.iter().map(|alg| {
                html! {
                    <option value={alg.key()} selected={*alg == props.selected}>
                        { alg.to_string() }
                    </option>
                }
            }).collect::<Html>() }
        </select>
    }
}

/// Labeled range input with its current value beside it.
#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub min: u32,
    pub max: u32,
    pub value: u32,
    pub disabled: bool,
    pub oninput: Callback<InputEvent>,
}

#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <div class="slider-with-value">
                <input type="range"
                    id={props.id.clone()}
                    min={props.min.to_string()}
                    max={props.max.to_string()}
                    step={SLIDER_STEP.to_string()}
                    value={props.value.to_string()}
                    disabled={props.disabled}
                    oninput={props.oninput.clone()}
                />
                <span class="slider-value">{ props.value }</span>
            </div>
        </div>
    }
}

/// Generate / Start / Stop buttons.
#[derive(Properties, PartialEq)]
pub struct ControlButtonsProps {
    pub sorting: bool,
    pub on_generate: Callback<MouseEvent>,
    pub on_start: Callback<MouseEvent>,
    pub on_stop: Callback<MouseEvent>,
}

#[function_component(ControlButtons)]
pub fn control_buttons(props: &ControlButtonsProps) -> Html {
    html! {
        <div class="button-row">
            <button class="btn-generate" disabled={props.sorting} onclick={props.on_generate.clone()}>
                { "Generate New Array" }
            </button>
            <button class="btn-start" disabled={props.sorting} onclick={props.on_start.clone()}>
                { "Start Sorting" }
            </button>
            <button class="btn-stop" disabled={!props.sorting} onclick={props.on_stop.clone()}>
                { "Stop Sorting" }
            </button>
        </div>
    }
}

/// Name, description and complexity of the selected variant.
#[derive(Properties, PartialEq)]
pub struct AlgorithmInfoCardProps {
    pub algorithm: Algorithm,
}

#[function_component(AlgorithmInfoCard)]
pub fn algorithm_info_card(props: &AlgorithmInfoCardProps) -> Html {
    let info = props.algorithm.info();
    html! {
        <div class="card info-card">
            <h2 class="card-title">{ &info.name }</h2>
            <p class="card-subtitle">{ "Algorithm Information" }</p>
            <p class="description">{ &info.description }</p>
            <p><strong>{ "Time Complexity: " }</strong>{ &info.time_complexity }</p>
            <p><strong>{ "Space Complexity: " }</strong>{ &info.space_complexity }</p>
            if props.algorithm.is_stable() {
                <p class="stable-note">{ "Stable: equal values keep their order." }</p>
            }
        </div>
    }
}

/// One-line status under the canvas.
pub fn render_status(sorting: bool, len: usize, error: Option<&str>) -> Html {
    html! {
        <div class="status-line">
            if sorting {
                <span class="status-sorting">{ format!("Sorting {} values...", len) }</span>
            } else {
                <span class="status-idle">{ format!("{} values ready", len) }</span>
            }
            if let Some(err) = error {
                <span class="current-error compact">{ err.to_string() }</span>
            }
        </div>
    }
}
