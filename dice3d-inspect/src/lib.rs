//! Command-line inspection of the dice meshes: builds each solid, reports
//! geometric defects and optionally exports STL files.
use dice3d_core::{analyze, shapes::legacy_icosahedron, stl, Dice, GeometryBuffer};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod report;

pub use report::{write_header, write_report};

pub const USAGE: &str = "\
Usage: dice3d-inspect [SHAPE ...] [OPTIONS]

Shapes: d4 d6 d8 d10 d20 (or tetrahedron, hexahedron, ...). Defaults to all.

Options:
  --size <N>       Die size passed to every shape (default 1)
  --export <DIR>   Write <shape>.stl for every built shape into DIR
  --binary         Export binary STL instead of ASCII
  --legacy-d20     Also report the icosahedron built from its legacy face table
  --load <FILE>    Report on an STL file (may be repeated)
  -h, --help       Print this message

Set RUST_LOG=debug for build details.";

#[derive(thiserror::Error, Debug)]
pub enum InspectError {
    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    Geometry(#[from] dice3d_core::InvalidGeometry),

    #[error("{}: {source}", .path.display())]
    Stl {
        path: PathBuf,
        source: dice3d_core::StlError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Options gathered from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct InspectConfig {
    pub shapes: Vec<Dice>,
    pub size: f32,
    pub export_dir: Option<PathBuf>,
    pub binary: bool,
    pub legacy_d20: bool,
    pub load: Vec<PathBuf>,
    pub help: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            shapes: Vec::new(),
            size: 1.0,
            export_dir: None,
            binary: false,
            legacy_d20: false,
            load: Vec::new(),
            help: false,
        }
    }
}

impl InspectConfig {
    /// Parse arguments, not including the program name.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self, InspectError> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.help = true,
                "--binary" => config.binary = true,
                "--legacy-d20" => config.legacy_d20 = true,
                "--size" => {
                    let value = required(&mut args, "--size")?;
                    config.size = value
                        .parse::<f32>()
                        .ok()
                        .filter(|s| s.is_finite() && *s > 0.0)
                        .ok_or_else(|| {
                            InspectError::Config(format!("invalid size `{}`", value))
                        })?;
                }
                "--export" => config.export_dir = Some(required(&mut args, "--export")?.into()),
                "--load" => config.load.push(required(&mut args, "--load")?.into()),
                flag if flag.starts_with('-') => {
                    return Err(InspectError::Config(format!("unknown option `{}`", flag)));
                }
                shape => {
                    let dice = shape
                        .parse::<Dice>()
                        .map_err(|e| InspectError::Config(e.to_string()))?;
                    if !config.shapes.contains(&dice) {
                        config.shapes.push(dice);
                    }
                }
            }
        }

        Ok(config)
    }

    /// Shapes to build: the named ones, or all of them when neither shapes
    /// nor files were given.
    pub fn selected_shapes(&self) -> Vec<Dice> {
        if self.shapes.is_empty() && self.load.is_empty() {
            Dice::ALL.to_vec()
        } else {
            self.shapes.clone()
        }
    }
}

fn required<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, InspectError> {
    args.next()
        .ok_or_else(|| InspectError::Config(format!("`{}` needs a value", flag)))
}

/// Build, check and export everything `config` asks for, writing the report to
/// `writer`. Returns how many solids have defects.
pub fn run<W: Write>(config: &InspectConfig, writer: &mut W) -> Result<usize, InspectError> {
    let mut defects = 0;
    write_header(writer)?;

    if let Some(dir) = &config.export_dir {
        fs::create_dir_all(dir)?;
    }

    for dice in config.selected_shapes() {
        let buffer = dice.geometry(config.size)?;
        let label = format!("{} {}", dice, dice.name());
        defects += inspect(writer, &label, Some(dice.face_count()), &buffer)?;

        if let Some(dir) = &config.export_dir {
            export(dir, &dice.to_string(), &buffer, config.binary)?;
        }
    }

    if config.legacy_d20 {
        let buffer = legacy_icosahedron(config.size)?;
        defects += inspect(writer, "d20 legacy table", Some(20), &buffer)?;
    }

    for path in &config.load {
        let data = fs::read(path)?;
        let buffer = stl::parse_stl(&data).map_err(|source| InspectError::Stl {
            path: path.clone(),
            source,
        })?;
        log::debug!("loaded {} triangles from {}", buffer.triangle_count(), path.display());
        defects += inspect(writer, &path.display().to_string(), None, &buffer)?;
    }

    Ok(defects)
}

fn inspect<W: Write>(
    writer: &mut W,
    label: &str,
    faces: Option<u32>,
    buffer: &GeometryBuffer,
) -> Result<usize, InspectError> {
    let report = analyze(buffer);
    write_report(writer, label, faces, &report)?;
    Ok(usize::from(!report.is_valid()))
}

fn export(dir: &Path, name: &str, buffer: &GeometryBuffer, binary: bool) -> Result<(), InspectError> {
    let path = dir.join(name).with_extension("stl");
    if binary {
        let data = stl::to_binary_stl(buffer).map_err(|source| InspectError::Stl {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, data)?;
    } else {
        fs::write(&path, stl::to_ascii_stl(buffer, name))?;
    }
    log::info!("exported {}", path.display());
    Ok(())
}
