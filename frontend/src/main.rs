fn main() {
    // Initialize the logger for WebAssembly
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(e) = frontend::start() {
        wasm_bindgen::throw_str(&e.to_string());
    }
}
