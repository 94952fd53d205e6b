#[cfg(target_arch = "wasm32")]
fn main() {
    staffboard_frontend::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    println!("staffboard-frontend targets wasm32; build it with `trunk serve`.");
}
