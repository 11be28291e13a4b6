#[macro_export]
/// Builds a Yew `Callback` that clones the listed handles and runs an async
/// body on the browser's task queue with `wasm_bindgen_futures::spawn_local`.
///
/// The callback returns immediately, which is what fire-and-forget work like
/// publishing a reaction needs: the UI never waits on the data channel.
///
/// ## Forms
///
/// 1. Ignoring the event:
/// ```compile_fail
/// let wave = async_callback!([room] {
///     let _ = send_reaction(&room, "👏").await;
/// });
/// ```
///
/// 2. Naming the event, optionally with its type:
/// ```compile_fail
/// let publish = async_callback!([room] |emoji: String| {
///     let _ = send_reaction(&room, &emoji).await;
/// });
/// ```
///
/// Every listed identifier is cloned once when the callback is built and once
/// more per invocation, so the async block owns its own handles.
macro_rules! async_callback {
    // Event arms first: a closure is itself an expression
    ([$($var:ident),* $(,)?] |$event:ident : $ty:ty| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event: $ty| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    ([$($var:ident),* $(,)?] |$event:ident| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
