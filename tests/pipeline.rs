use waves_wasm::frame::FrameClock;
use waves_wasm::grid::{Grid, POINT_COUNT};
use waves_wasm::mesh::{build_mesh, Mesh, TexelMapping, VERTEX_COUNT};

fn pipeline(offsets: [f32; POINT_COUNT]) -> Mesh {
    build_mesh(&Grid::with_offsets(offsets)).assign_texels(TexelMapping::default())
}

#[test]
fn same_offsets_same_bytes() {
    let mut rng = fastrand::Rng::with_seed(1234);
    let offsets: [f32; POINT_COUNT] = std::array::from_fn(|_| rng.u32(0..360) as f32);

    let first = pipeline(offsets);
    let second = pipeline(offsets);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn zero_offsets_corners() {
    let mesh = pipeline([0.0; POINT_COUNT]);
    let v = mesh.vertices();

    assert_eq!(v.len(), VERTEX_COUNT);
    assert_eq!(v[0].position, [-1.0, 1.0]);
    assert_eq!(v[0].texel, [0.0, 0.0]);
    assert!(v.iter().all(|v| v.offset == 0.0));

    // bottom-right point closes the last cell of the last row
    let bottom_right = v[VERTEX_COUNT - 3];
    assert_eq!(bottom_right.position, [1.0, -1.0]);
    assert_eq!(bottom_right.texel, [0.5, 0.5]);
}

#[test]
fn seeded_grids_reproduce() {
    let a = build_mesh(&Grid::generate(&mut fastrand::Rng::with_seed(77)))
        .assign_texels(TexelMapping::Planar);
    let b = build_mesh(&Grid::generate(&mut fastrand::Rng::with_seed(77)))
        .assign_texels(TexelMapping::Planar);
    assert_eq!(a, b);
}

#[test]
fn full_atlas_cycle() {
    let mut clock = FrameClock::default();
    let mut shifts = Vec::new();
    for _ in 0..1537 {
        let shift = clock.tick().shift;
        if shifts.last() != Some(&shift) {
            shifts.push(shift);
        }
    }
    assert_eq!(
        shifts,
        vec![[0.0, 0.0], [0.5, 0.0], [0.0, 0.5], [0.5, 0.5], [0.0, 0.0]]
    );
}
