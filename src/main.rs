//! Main module for the sorting visualizer using Yew.
//! Wires UI components, the session hook and the animated sort runner.

use log::warn;
use sort_visualizer::{
    animate,
    defaults::{CANVAS_HEIGHT, CANVAS_WIDTH, MAX_ARRAY_SIZE, MAX_SPEED, MIN_ARRAY_SIZE, MIN_SPEED},
    render, Algorithm, TimeoutPacer, VisualizerError,
};
use web_sys::{HtmlCanvasElement, HtmlInputElement};
use yew::prelude::*;

mod components;
mod config;
mod haptics;
mod hooks;
mod utils;

use components::{render_status, AlgorithmInfoCard, AlgorithmSelect, ControlButtons, Slider};
use config::*;
use hooks::{use_session, use_vibration, SessionHandle};
use utils::{parse_size, parse_speed};

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Record a rejected action so the status line can show it.
fn report(error_message: &UseStateHandle<Option<String>>, result: Result<(), VisualizerError>) {
    match result {
        Ok(()) => error_message.set(None),
        Err(e) => {
            warn!("{}", e);
            error_message.set(Some(e.to_string()));
        }
    }
}

/// Run the job handed out by the session, publishing every snapshot back to it.
fn spawn_sort(session: SessionHandle, vibration: hooks::Vibration) {
    let job = match session.update(|s| s.begin_sort()) {
        Ok(job) => job,
        Err(e) => {
            warn!("{}", e);
            return;
        }
    };
    vibration.pulse(VIBRATE_START_MS);

    wasm_bindgen_futures::spawn_local(async move {
        let on_step = {
            let session = session.clone();
            move |snapshot: &[u32]| session.update(|s| s.publish(snapshot))
        };
        let outcome = animate(
            job.algorithm,
            job.values,
            job.delay_ms,
            &TimeoutPacer,
            &job.cancel,
            on_step,
        )
        .await;

        if let Err(e) = session.update(|s| s.finish_sort(outcome)) {
            warn!("{}", e);
        }
        vibration.pulse(VIBRATE_DONE_MS);
    });
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let session = use_session();
    let vibration = use_vibration();
    let canvas_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);

    let (settings, values, sorting) = {
        let s = session.borrow();
        (s.settings(), s.values().to_vec(), s.is_sorting())
    };

    // Redraw whenever a new snapshot lands
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(values.clone(), move |values| {
            render::draw(canvas_ref.cast::<HtmlCanvasElement>().as_ref(), values);
            || ()
        });
    }

    let on_algorithm = {
        let session = session.clone();
        let error_message = error_message.clone();
        Callback::from(move |alg: Algorithm| {
            report(&error_message, session.update(|s| s.set_algorithm(alg)));
        })
    };

    let on_speed = {
        let session = session.clone();
        let error_message = error_message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_speed(&input.value()) {
                Ok(speed) => report(&error_message, session.update(|s| s.set_speed(speed))),
                Err(msg) => {
                    warn!("{}", msg);
                    error_message.set(Some(msg));
                }
            }
        })
    };

    let on_size = {
        let session = session.clone();
        let error_message = error_message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_size(&input.value()) {
                Ok(size) => report(
                    &error_message,
                    session.update(|s| s.set_size(size, &mut rand::rng())),
                ),
                Err(msg) => {
                    warn!("{}", msg);
                    error_message.set(Some(msg));
                }
            }
        })
    };

    let on_generate = {
        let session = session.clone();
        let error_message = error_message.clone();
        Callback::from(move |_: MouseEvent| {
            let result = session.update(|s| s.regenerate(&mut rand::rng()));
            if result.is_ok() {
                vibration.pulse(VIBRATE_REGENERATE_MS);
            }
            report(&error_message, result);
        })
    };

    let on_start = {
        let session = session.clone();
        let error_message = error_message.clone();
        Callback::from(move |_: MouseEvent| {
            error_message.set(None);
            spawn_sort(session.clone(), vibration);
        })
    };

    let on_stop = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.borrow().request_cancel();
        })
    };

    html! {
        <div class="container">
            <h1 class="title">{ "Visualize Your Sorting Algorithm" }</h1>

            <div class="canvas-area">
                <canvas
                    id={CANVAS_ID}
                    ref={canvas_ref}
                    width={CANVAS_WIDTH.to_string()}
                    height={CANVAS_HEIGHT.to_string()}
                />
                { render_status(sorting, values.len(), error_message.as_deref()) }
            </div>

            <div class="panels">
                <div class="card controls-card">
                    <h2 class="card-title">{ "Controls" }</h2>
                    <div class="control-row">
                        <AlgorithmSelect
                            selected={settings.algorithm}
                            disabled={sorting}
                            onchange={on_algorithm}
                        />
                        <ControlButtons {sorting} {on_generate} {on_start} {on_stop} />
                    </div>
                    <Slider
                        id={SPEED_INPUT_ID}
                        label="Speed"
                        min={MIN_SPEED}
                        max={MAX_SPEED}
                        value={settings.speed}
                        disabled={sorting}
                        oninput={on_speed}
                    />
                    <Slider
                        id={SIZE_INPUT_ID}
                        label="Array Size"
                        min={MIN_ARRAY_SIZE as u32}
                        max={MAX_ARRAY_SIZE as u32}
                        value={settings.size as u32}
                        disabled={sorting}
                        oninput={on_size}
                    />
                </div>

                <AlgorithmInfoCard algorithm={settings.algorithm} />
            </div>
        </div>
    }
}

/// Entry point: initializes Yew renderer for the Main component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}
