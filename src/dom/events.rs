// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Listeners en elementos: el navegador los limpia al destruir el elemento, por
// eso closure.forget() es seguro. Listeners globales (window, mapa): registrar
// UNA SOLA VEZ desde App::render().
// ============================================================================

use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};

thread_local! {
    static GLOBAL_LISTENERS_REGISTERED: Cell<bool> = const { Cell::new(false) };
}

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Devuelve false si los listeners globales ya estaban registrados
pub fn claim_global_listeners() -> bool {
    GLOBAL_LISTENERS_REGISTERED.with(|flag| !flag.replace(true))
}

pub fn on_window_keydown<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
    window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Función JS `(lat, lng) => ...` para el bridge del mapa
pub fn map_click_callback<F>(handler: F) -> js_sys::Function
where
    F: FnMut(f64, f64) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(f64, f64)>);
    let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    closure.forget();
    function
}

/// Función JS `(stallId) => ...` para los marcadores
pub fn marker_click_callback<F>(handler: F) -> js_sys::Function
where
    F: FnMut(String) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(String)>);
    let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    closure.forget();
    function
}
