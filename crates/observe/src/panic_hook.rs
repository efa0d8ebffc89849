/// Routes panics through `tracing` so they show up alongside the regular log
/// output instead of only on stderr.
pub fn install() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(%info, "thread panicked");
        previous(info);
    }));
}
