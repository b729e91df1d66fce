mod assets;
mod components;
mod logging;
mod pages;
mod router;

fn main() {
    logging::init();
    let perf = web_sys::window().and_then(|w| w.performance());
    let t0 = perf.as_ref().map(|p| p.now());
    log::info!("Starting musicRitmo frontend");

    router::mount_app();
    if let (Some(p), Some(start)) = (perf.as_ref(), t0) {
        log::info!("Mounted ({} ms)", p.now() - start);
    }
}
