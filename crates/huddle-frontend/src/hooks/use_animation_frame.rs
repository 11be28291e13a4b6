use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(closure: &FrameClosure) -> Option<i32> {
    let window = web_sys::window()?;
    let closure = closure.borrow();
    window
        .request_animation_frame(closure.as_ref()?.as_ref().unchecked_ref())
        .ok()
}

/// Calls `on_frame` with the `requestAnimationFrame` timestamp on every display
/// refresh while it returns `true`. The pending frame is cancelled when the
/// component unmounts.
#[hook]
pub fn use_animation_frame(on_frame: Callback<f64, bool>) {
    let on_frame_ref = use_mut_ref(|| on_frame.clone());
    *on_frame_ref.borrow_mut() = on_frame;

    use_effect_with((), move |_| {
        let frame_id = Rc::new(Cell::new(None::<i32>));
        let closure: FrameClosure = Rc::new(RefCell::new(None));

        {
            let frame_id = frame_id.clone();
            let closure_inner = closure.clone();
            *closure.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
                frame_id.set(None);
                let on_frame = on_frame_ref.borrow().clone();
                if on_frame.emit(timestamp) {
                    frame_id.set(request_frame(&closure_inner));
                }
            }));
        }
        frame_id.set(request_frame(&closure));

        move || {
            if let Some(id) = frame_id.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
            // Break the closure's reference to itself
            closure.borrow_mut().take();
        }
    });
}
