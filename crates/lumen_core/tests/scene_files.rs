//! Bundled scene and input files stay in sync with the built-in definitions.

use lumen_core::{load_scene, IlluminanceInput, Scene};

fn bundled(name: &str) -> String {
    format!("{}/../../scenes/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn room_file_matches_demo_scene() {
    let loaded = load_scene(bundled("room.json")).expect("room.json should load");
    let demo = Scene::demo();

    assert_eq!(loaded.name, "room");
    assert_eq!(loaded.camera, demo.camera);
    assert_eq!(loaded.lights.len(), demo.lights.len());
    assert_eq!(loaded.primitive_count(), 28);
    assert_eq!(loaded.objects.len(), demo.objects.len());

    for (file_object, demo_object) in loaded.objects.iter().zip(&demo.objects) {
        assert_eq!(file_object.name, demo_object.name);
        assert_eq!(file_object.shape, demo_object.shape);
        assert_eq!(
            loaded.get_material(file_object.material),
            demo.get_material(demo_object.material),
            "material of {}",
            file_object.name
        );
    }

    for (file_light, demo_light) in loaded.lights.iter().zip(&demo.lights) {
        assert_eq!(file_light.intensity(), demo_light.intensity());
        let p = lumen_math::Vec3::new(0.5, 0.25, -1.0);
        assert!((file_light.direction_to(p) - demo_light.direction_to(p)).length() < 1e-12);
    }
}

#[test]
fn bundled_illuminance_input() {
    let source = std::fs::read_to_string(bundled("illuminance.txt")).unwrap();
    let input = IlluminanceInput::parse(&source).unwrap();
    let e = input.evaluate();

    assert!(e.r > 0.0);
    assert_eq!(e.r, e.g);
    assert_eq!(e.g, e.b);
}
