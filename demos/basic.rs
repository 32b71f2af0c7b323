//! Standalone demo: a horizontal and a vertical track bar sharing one value.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_trackbar::{track_bar, Appearance, BorderStyle, Orientation, Placement};
use tracing_subscriber::EnvFilter;

const VERTICAL_LOOK: &str = r##"
orientation = "vertical"
tick_frequency = 5
label_placement = "leading"
tick_placement = "both"
border_style = "sunken"
tracker_color = "#C66218"
"##;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let value = RwSignal::new(10);
    let vertical = Appearance::from_toml_str(VERTICAL_LOOK).unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to default look");
        Appearance {
            orientation: Orientation::Vertical,
            ..Default::default()
        }
    });

    floem::Application::new()
        .window(
            move |_| {
                h_stack((
                    v_stack((
                        track_bar(value)
                            .range(0, 20)
                            .appearance(Appearance {
                                tick_frequency: 2,
                                label_placement: Placement::Both,
                                border_style: BorderStyle::Solid,
                                ..Default::default()
                            })
                            .on_scroll(|| tracing::info!("scrolled"))
                            .style(|s| s.width_full()),
                        label(move || format!("value: {}", value.get())),
                    ))
                    .style(|s| s.flex_grow(1.0).gap(8.0)),
                    track_bar(value)
                        .range(0, 20)
                        .appearance(vertical.clone())
                        .large_change(5)
                        .style(|s| s.height_full()),
                ))
                .style(|s| s.size_full().padding(12.0).gap(12.0))
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((420.0, 260.0))
                    .title("floem-trackbar"),
            ),
        )
        .run();
}
