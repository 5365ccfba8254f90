mod app;
mod game;
mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use boxes::layout::{floats_as_bytes, indices_as_bytes};
use boxes::{MeshBatch, Scene, SceneConfig};
use clap::Parser;
use winit::event_loop::EventLoop;

#[derive(Parser)]
#[command(name = "viewer")]
#[command(about = "Two spinning boxes drawn from one merged index buffer")]
struct Args {
    #[arg(long, default_value_t = 0.5, help = "Half-extent of each box")]
    size: f32,

    #[arg(long, default_value_t = 6.0, help = "Seconds per full revolution")]
    spin_period: f32,

    #[arg(long, help = "Write the upload buffers to this directory and exit")]
    dump: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = SceneConfig::default()
        .with_box_size(args.size)
        .with_spin_period(args.spin_period);
    let scene = Scene::new(config)?;
    let batch = scene.build()?;

    if let Some(dir) = args.dump {
        return dump_buffers(&dir, &batch);
    }

    let event_loop = EventLoop::new()?;
    let mut app = app::App::new(scene, batch);
    event_loop.run_app(&mut app)?;

    Ok(())
}

fn dump_buffers(dir: &Path, batch: &MeshBatch) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mesh = batch.mesh();
    let files: [(&str, &[u8]); 3] = [
        ("vertices.bin", floats_as_bytes(&mesh.vertices)),
        ("indices.bin", indices_as_bytes(&mesh.indices)),
        ("colors.bin", floats_as_bytes(batch.colors())),
    ];

    for (name, bytes) in files {
        let path = dir.join(name);
        fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_writes_upload_layouts() {
        let dir = std::env::temp_dir().join(format!("boxes-dump-{}", std::process::id()));
        let scene = Scene::new(SceneConfig::default()).unwrap();
        let batch = scene.build().unwrap();

        dump_buffers(&dir, &batch).unwrap();

        let vertices = fs::read(dir.join("vertices.bin")).unwrap();
        let indices = fs::read(dir.join("indices.bin")).unwrap();
        let colors = fs::read(dir.join("colors.bin")).unwrap();
        assert_eq!(vertices.len(), 576);
        assert_eq!(indices.len(), 144);
        assert_eq!(colors.len(), 576);

        assert_eq!(vertices, floats_as_bytes(&batch.mesh().vertices));
        let second_box: Vec<u16> = indices[72..]
            .chunks_exact(2)
            .map(|b| u16::from_ne_bytes([b[0], b[1]]))
            .collect();
        assert!(second_box.iter().all(|&i| (24..48).contains(&i)));

        fs::remove_dir_all(&dir).unwrap();
    }
}
