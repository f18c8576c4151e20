//! Camera probe: loads view options, builds the configured camera, and
//! logs what it would upload.
//!
//! ```text
//! vantage [OPTIONS.toml]   # defaults when no file is given
//! vantage --schema         # print the options JSON schema
//! ```

use std::path::Path;

use glam::DVec2;
use vantage::options::Options;

#[allow(clippy::print_stdout)]
fn print_schema() {
    match serde_json::to_string_pretty(&Options::json_schema()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize options schema: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("--schema") {
        print_schema();
        return;
    }

    let options = match arg {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let camera = match options.camera.build_camera() {
        Ok(camera) => camera,
        Err(e) => {
            log::error!("Invalid camera options: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "{:?} camera at {:?}, look {:?}, up {:?}",
        camera.kind(),
        camera.position(),
        camera.look_at(),
        camera.up()
    );
    let projection = camera.projection_matrix();
    for row in 0..4 {
        log::info!("projection row {row}: {:?}", projection.row(row));
    }
    log::info!(
        "depth: near -> {}, far -> {}",
        camera.ndc_depth(camera.z_near()),
        camera.ndc_depth(camera.z_far())
    );
    if let Some(ray) = camera.pick_ray(DVec2::ZERO) {
        log::info!(
            "centre ray: origin {:?}, direction {:?}",
            ray.origin,
            ray.direction
        );
    }
}
