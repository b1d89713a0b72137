//! lux: render a scene to a PNG or JPEG file.
//!
//! Without `--scene` the built-in demo (three glassy spheres) is rendered.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use image::{DynamicImage, ImageFormat};

use lux_core::{load_scene, Camera, Light, Material, BLUE, GREEN, RED, WHITE};
use lux_math::{Vector, MAX_TRACE_DEPTH};
use lux_renderer::{render, RenderConfig, Scene, Sphere, DEFAULT_BUCKET_SIZE};

#[derive(Parser, Debug)]
#[command(name = "lux")]
#[command(version)]
#[command(about = "Recursive CPU ray tracer")]
struct Cli {
    /// Output image; the extension (.png, .jpg, .jpeg) selects the format
    #[arg(long, default_value = "output.jpg")]
    filename: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// JSON scene file to render instead of the demo scene
    #[arg(long, value_name = "FILE")]
    scene: Option<PathBuf>,

    /// Maximum reflection/refraction depth
    #[arg(long, default_value_t = MAX_TRACE_DEPTH)]
    max_depth: u32,

    /// Trace on the calling thread only
    #[arg(long)]
    sequential: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("jpg") | Some("jpeg") => Ok(Self::Jpeg),
            _ => bail!(
                "Unsupported output file {}: expected a .png, .jpg or .jpeg extension",
                path.display()
            ),
        }
    }
}

/// Three reflective, half-transparent spheres in front of a white sky.
fn demo_scene() -> Scene {
    let glass = |color| Material::new(color, 0.5, 1.0);

    Scene::new(Camera::new(75.0), WHITE)
        .with_light(Light::new(Vector::new(-20.0, 30.0, 20.0), WHITE))
        .with_object(Sphere::new(Vector::new(5.0, -1.0, -15.0), 2.0, glass(BLUE)))
        .with_object(Sphere::new(Vector::new(3.0, 0.0, -35.0), 2.0, glass(GREEN)))
        .with_object(Sphere::new(Vector::new(-5.5, 0.0, -15.0), 3.0, glass(RED)))
}

fn save(image: image::RgbaImage, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Png => image.save_with_format(path, ImageFormat::Png),
        // JPEG has no alpha channel
        OutputFormat::Jpeg => DynamicImage::ImageRgba8(image)
            .to_rgb8()
            .save_with_format(path, ImageFormat::Jpeg),
    }
    .with_context(|| format!("Failed to write {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    // Reject a bad filename before spending time on the render
    let format = OutputFormat::from_path(&cli.filename)?;

    let scene = match &cli.scene {
        Some(path) => {
            let description = load_scene(path)
                .with_context(|| format!("Failed to load scene {}", path.display()))?;
            Scene::from_description(&description)
        }
        None => {
            log::info!("No scene file given, rendering the demo scene");
            demo_scene()
        }
    };

    let config = RenderConfig {
        max_depth: cli.max_depth,
        bucket_size: DEFAULT_BUCKET_SIZE,
        parallel: !cli.sequential,
    };

    let image = render(&scene, cli.width, cli.height, &config)?;
    save(image.to_image(), &cli.filename, format)?;

    log::info!("Saved {}", cli.filename.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["lux"]).unwrap();
        assert_eq!(cli.filename, PathBuf::from("output.jpg"));
        assert_eq!(cli.width, 1000);
        assert_eq!(cli.height, 1000);
        assert_eq!(cli.max_depth, 3);
        assert!(cli.scene.is_none());
        assert!(!cli.sequential);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "lux",
            "--filename",
            "out.png",
            "--width",
            "800",
            "--height",
            "600",
            "--scene",
            "scene.json",
            "--max-depth",
            "5",
            "--sequential",
        ])
        .unwrap();

        assert_eq!(cli.filename, PathBuf::from("out.png"));
        assert_eq!((cli.width, cli.height), (800, 600));
        assert_eq!(cli.scene, Some(PathBuf::from("scene.json")));
        assert_eq!(cli.max_depth, 5);
        assert!(cli.sequential);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(Cli::try_parse_from(["lux", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["lux", "--height", "0"]).is_err());
        assert!(Cli::try_parse_from(["lux", "--width", "-4"]).is_err());
    }

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("a.png")).unwrap(),
            OutputFormat::Png
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("dir/b.JPG")).unwrap(),
            OutputFormat::Jpeg
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("c.jpeg")).unwrap(),
            OutputFormat::Jpeg
        );
        assert!(OutputFormat::from_path(Path::new("d.bmp")).is_err());
        assert!(OutputFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_demo_scene_contents() {
        let scene = demo_scene();
        assert_eq!(scene.camera.field_of_view, 75.0);
        assert_eq!(scene.background, WHITE);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.objects().len(), 3);

        for object in scene.objects() {
            assert_eq!(object.material().transparency, 0.5);
            assert_eq!(object.material().reflectivity, 1.0);
        }
        assert_eq!(scene.objects()[1].position(), Vector::new(3.0, 0.0, -35.0));
    }

    #[test]
    fn test_save_writes_both_formats() {
        let dir = std::env::temp_dir();
        let image = image::RgbaImage::from_pixel(4, 3, image::Rgba([255, 0, 0, 255]));

        for (name, format) in [
            ("lux_cli_test.png", OutputFormat::Png),
            ("lux_cli_test.jpg", OutputFormat::Jpeg),
        ] {
            let path = dir.join(name);
            save(image.clone(), &path, format).unwrap();

            let loaded = image::open(&path).unwrap();
            assert_eq!((loaded.width(), loaded.height()), (4, 3));
            std::fs::remove_file(&path).unwrap();
        }
    }
}
