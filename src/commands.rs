use std::error::Error;
use std::path::Path;

use serde::Serialize;
use voxset_grid::{Entry, EntryCollectionDto, VisualizationWindow};
use voxset_mesh_cpu::{Face, FaceBuffer, GridMesh, mesh_grid};
use voxset_world::{
    EmptyGenerator3D, GenError, Generator, PropertyValue, TerrainGenParams, TerrainGenerator,
    draw_seed, generate_batch, load_params_from_path,
};

use crate::cli::{GenerateArgs, GeneratorKind, MeshArgs, PropsArgs, ValidateArgs};
use crate::dataset::{load_palette, read_collection, write_collection};

pub fn generate(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let entries = match args.generator {
        GeneratorKind::Terrain => {
            let mut g = terrain_generator(args.config.as_deref())?;
            run_batch(&mut g, args)?
        }
        GeneratorKind::Empty => {
            warn_unused_config(args.config.as_deref());
            run_batch(&mut EmptyGenerator3D::default(), args)?
        }
    };
    let collection = EntryCollectionDto {
        name: args.name.clone(),
        entries: entries.iter().map(Entry::to_dto).collect(),
    };
    write_collection(&collection, args.out.as_deref())
}

fn terrain_generator(config: Option<&Path>) -> Result<TerrainGenerator, Box<dyn Error>> {
    let params = match config {
        Some(path) => load_params_from_path(path)?,
        None => TerrainGenParams::default(),
    };
    Ok(TerrainGenerator::new(params))
}

fn warn_unused_config(config: Option<&Path>) {
    if let Some(path) = config {
        log::warn!(
            "ignoring terrain config {} for the empty generator",
            path.display()
        );
    }
}

fn run_batch<G: Generator>(g: &mut G, args: &GenerateArgs) -> Result<Vec<Entry>, Box<dyn Error>> {
    let mut assignments = Vec::new();
    if let Some(size) = &args.size {
        assignments.push(("size", size.as_str()));
    }
    for s in &args.sets {
        assignments.push(parse_assignment(s)?);
    }
    apply_properties(g, &assignments)?;
    let base_seed = draw_seed(args.seed);
    Ok(generate_batch(g, args.count, base_seed)?)
}

/// Splits `name=value`.
pub fn parse_assignment(s: &str) -> Result<(&str, &str), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => Ok((k.trim(), v.trim())),
        _ => Err(format!("expected NAME=VALUE, got '{s}'")),
    }
}

/// Parses each value against the property's declared kind and sets it
/// through the generator's validator.
pub fn apply_properties<G: Generator>(
    g: &mut G,
    assignments: &[(&str, &str)],
) -> Result<(), GenError> {
    for &(name, text) in assignments {
        let kind = g
            .properties()
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.kind)
            .ok_or_else(|| GenError::UnknownProperty(name.to_string()))?;
        let value = PropertyValue::parse(kind, text).ok_or_else(|| GenError::InvalidProperty {
            name: name.to_string(),
            reason: format!("cannot read '{text}' as {kind:?}"),
        })?;
        g.set_property(name, value)?;
    }
    Ok(())
}

pub fn validate(args: &ValidateArgs) -> Result<(), Box<dyn Error>> {
    let collection = read_collection(&args.file)?;
    let total = collection.entries.len();
    let mut invalid = 0;
    for (i, dto) in collection.entries.iter().enumerate() {
        let v = dto.validate();
        if !v.is_ok() {
            invalid += 1;
        }
        println!("[{i}] {}: {v}", display_name(&dto.friendly_name));
    }
    if invalid > 0 {
        return Err(format!("{invalid} of {total} entries failed validation").into());
    }
    log::info!("{} entries valid in {}", total, args.file.display());
    Ok(())
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "<unnamed>" } else { name }
}

/// Parses `x0,y0,z0:x1,y1,z1`.
pub fn parse_window(s: &str) -> Result<VisualizationWindow, String> {
    let corner = |part: &str| -> Option<(i32, i32, i32)> {
        let v: Vec<i32> = part
            .split(',')
            .map(|c| c.trim().parse().ok())
            .collect::<Option<_>>()?;
        match v.as_slice() {
            [x, y, z] => Some((*x, *y, *z)),
            _ => None,
        }
    };
    let bad = || format!("expected window x0,y0,z0:x1,y1,z1, got '{s}'");
    let (lo, hi) = s.split_once(':').ok_or_else(bad)?;
    let min = corner(lo).ok_or_else(bad)?;
    let max = corner(hi).ok_or_else(bad)?;
    Ok(VisualizationWindow::new(min, max))
}

#[derive(Debug, Serialize)]
pub struct BucketReport {
    pub face: &'static str,
    pub solid_faces: usize,
    pub transparent_faces: usize,
    pub vertices: usize,
    pub bounds: Option<[[f32; 3]; 2]>,
}

#[derive(Debug, Serialize)]
pub struct MeshReport {
    pub entry: String,
    pub dimensions: Vec<usize>,
    pub solid_faces: usize,
    pub transparent_faces: usize,
    pub buckets: Vec<BucketReport>,
}

fn face_name(face: Face) -> &'static str {
    match face {
        Face::PosX => "+x",
        Face::NegX => "-x",
        Face::PosY => "+y",
        Face::NegY => "-y",
        Face::PosZ => "+z",
        Face::NegZ => "-z",
    }
}

fn bucket_report(face: &'static str, solid: &FaceBuffer, transparent: &FaceBuffer) -> BucketReport {
    let bounds = match (solid.bounds(), transparent.bounds()) {
        (Some(a), Some(b)) => Some((a.min.min(b.min), a.max.max(b.max))),
        (Some(a), None) | (None, Some(a)) => Some((a.min, a.max)),
        (None, None) => None,
    };
    BucketReport {
        face,
        solid_faces: solid.face_count(),
        transparent_faces: transparent.face_count(),
        vertices: solid.vertex_count() + transparent.vertex_count(),
        bounds: bounds.map(|(lo, hi)| [[lo.x, lo.y, lo.z], [hi.x, hi.y, hi.z]]),
    }
}

impl MeshReport {
    pub fn new(entry: &Entry, mesh: &GridMesh) -> Self {
        let buckets = if mesh.bucket(Face::PosX).is_some() {
            Face::ALL
                .iter()
                .filter_map(|&f| {
                    let (s, t) = mesh.bucket(f)?;
                    Some(bucket_report(face_name(f), s, t))
                })
                .collect()
        } else {
            mesh.solid
                .iter()
                .zip(&mesh.transparent)
                .map(|(s, t)| bucket_report("pixels", s, t))
                .collect()
        };
        Self {
            entry: entry.friendly_name.clone(),
            dimensions: entry.grid.dimensions(),
            solid_faces: mesh.solid_face_count(),
            transparent_faces: mesh.transparent_face_count(),
            buckets,
        }
    }
}

pub fn mesh(args: &MeshArgs) -> Result<(), Box<dyn Error>> {
    let collection = read_collection(&args.file)?;
    let dto = collection.entries.get(args.entry).ok_or_else(|| {
        format!(
            "entry {} out of range: {} has {} entries",
            args.entry,
            args.file.display(),
            collection.entries.len()
        )
    })?;
    let entry = Entry::from_dto(dto)?;
    let palette = load_palette(args.palette.as_deref())?;
    let window = args.window.as_deref().map(parse_window).transpose()?;
    if window.is_some() && entry.grid.is_2d() {
        log::warn!("window ignored for 2D entry '{}'", entry.friendly_name);
    }
    let mesh = mesh_grid(&entry, &palette, window)?;
    let report = MeshReport::new(&entry, &mesh);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    let dims: Vec<String> = report.dimensions.iter().map(|d| d.to_string()).collect();
    println!(
        "{} ({}): {} solid, {} transparent faces",
        display_name(&report.entry),
        dims.join("x"),
        report.solid_faces,
        report.transparent_faces
    );
    for b in &report.buckets {
        println!(
            "  {:>6}  solid={:<6} transparent={:<6} vertices={}",
            b.face, b.solid_faces, b.transparent_faces, b.vertices
        );
    }
    Ok(())
}

fn print_props<G: Generator>(g: &G) {
    println!("{}", g.name());
    for p in g.properties() {
        println!("  {:<12} {:<12} {:?} = {}", p.name, p.label, p.kind, (p.get)(g));
    }
}

pub fn props(args: &PropsArgs) -> Result<(), Box<dyn Error>> {
    match args.generator {
        GeneratorKind::Terrain => print_props(&terrain_generator(args.config.as_deref())?),
        GeneratorKind::Empty => {
            warn_unused_config(args.config.as_deref());
            print_props(&EmptyGenerator3D::default());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxset_world::PropertyKind;

    #[test]
    fn assignment_needs_a_name() {
        assert_eq!(parse_assignment("size=8x8"), Ok(("size", "8x8")));
        assert_eq!(parse_assignment(" tree_chance = 0.5 "), Ok(("tree_chance", "0.5")));
        assert!(parse_assignment("=3").is_err());
        assert!(parse_assignment("size").is_err());
    }

    #[test]
    fn window_parses_two_corners() {
        let w = parse_window("0,1,2:4,5,6").unwrap();
        assert_eq!(w, VisualizationWindow::new((0, 1, 2), (4, 5, 6)));
        assert!(parse_window("0,1:4,5,6").is_err());
        assert!(parse_window("0,1,2").is_err());
        assert!(parse_window("a,b,c:1,2,3").is_err());
    }

    #[test]
    fn properties_go_through_validation() {
        let mut g = TerrainGenerator::default();
        apply_properties(&mut g, &[("size", "12x7"), ("cave_chance", "0")]).unwrap();
        assert_eq!((g.params.width, g.params.height), (12, 7));
        assert_eq!(g.params.cave_chance, 0.0);

        assert!(matches!(
            apply_properties(&mut g, &[("size", "0x7")]),
            Err(GenError::InvalidProperty { .. })
        ));
        assert!(matches!(
            apply_properties(&mut g, &[("size", "big")]),
            Err(GenError::InvalidProperty { .. })
        ));
        assert!(matches!(
            apply_properties(&mut g, &[("colour", "1")]),
            Err(GenError::UnknownProperty(_))
        ));
        assert_eq!((g.params.width, g.params.height), (12, 7));
    }

    #[test]
    fn empty_generator_takes_three_dimensional_size() {
        let mut g = EmptyGenerator3D::default();
        assert_eq!(g.properties()[0].kind, PropertyKind::Size3);
        apply_properties(&mut g, &[("size", "2x3x4")]).unwrap();
        assert_eq!(g.size, (2, 3, 4));
    }

    #[test]
    fn report_lists_six_buckets_for_voxels_and_one_for_pixels() {
        let palette = load_palette(None).unwrap();
        let mut g = EmptyGenerator3D::default();
        apply_properties(&mut g, &[("size", "2x2x2")]).unwrap();
        let voxels = g.generate(Some(1)).unwrap();
        let m = mesh_grid(&voxels, &palette, None).unwrap();
        let r = MeshReport::new(&voxels, &m);
        assert_eq!(r.buckets.len(), 6);
        assert_eq!(r.solid_faces + r.transparent_faces, 0);
        assert!(r.buckets.iter().all(|b| b.bounds.is_none()));

        let terrain = TerrainGenerator::with_size(8, 8).generate(Some(3)).unwrap();
        let m = mesh_grid(&terrain, &palette, None).unwrap();
        let r = MeshReport::new(&terrain, &m);
        assert_eq!(r.buckets.len(), 1);
        assert_eq!(r.buckets[0].face, "pixels");
        assert_eq!(r.dimensions, vec![8, 8]);
        assert!(r.solid_faces > 0);
    }
}
