#[cfg(any(test, target_arch = "wasm32"))]
mod contact;
#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(any(test, target_arch = "wasm32"))]
mod rate_limit;
#[cfg(any(test, target_arch = "wasm32"))]
mod theme;
#[cfg(any(test, target_arch = "wasm32"))]
mod typing;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
