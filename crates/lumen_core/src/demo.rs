//! Built-in scenes.

use lumen_math::{Color, Vec3};

use crate::scene::{CameraSettings, Scene, Shape};
use crate::{Light, Material, Mesh};

impl Scene {
    /// The reference room: a yellow floor, two boxes in front of a white
    /// back wall, lit by one point light and one directional light.
    pub fn demo() -> Self {
        let mut scene = Scene::new("demo");
        scene.camera = CameraSettings::default();

        let wall = scene.add_material(
            Material::new(Color::WHITE, 0.7, 0.0, 10.0).with_reflectivity(0.1),
        );
        let floor = scene.add_material(
            Material::new(Color::new(1.0, 1.0, 0.0), 0.7, 0.3, 10.0).with_reflectivity(0.1),
        );
        let blue = scene.add_material(
            Material::new(Color::new(0.2, 0.2, 0.9), 0.7, 30.0, 100.0)
                .with_specular_color(Color::new(0.0, 1.0, 0.0))
                .with_reflectivity(0.1),
        );
        let rose = scene.add_material(
            Material::new(Color::new(0.7, 0.4, 0.5), 0.7, 30.0, 100.0).with_reflectivity(0.15),
        );

        scene.add_object(
            "floor",
            Shape::Mesh(Mesh::new(
                vec![
                    Vec3::new(-20.0, 0.0, -20.0),
                    Vec3::new(20.0, 0.0, -20.0),
                    Vec3::new(20.0, 0.0, 20.0),
                    Vec3::new(-20.0, 0.0, 20.0),
                ],
                vec![0, 2, 1, 0, 3, 2],
            )),
            floor,
        );
        scene.add_object(
            "cube1",
            Shape::Mesh(Mesh::cuboid(
                Vec3::new(-1.7, 0.3, -1.6),
                Vec3::new(0.3, 2.3, 0.4),
            )),
            blue,
        );
        scene.add_object(
            "cube2",
            Shape::Mesh(Mesh::cuboid(
                Vec3::new(1.0, -0.2, -1.5),
                Vec3::new(4.0, 2.8, 1.5),
            )),
            rose,
        );
        scene.add_object(
            "wall",
            Shape::Mesh(Mesh::quad([
                Vec3::new(-20.0, -20.0, -10.0),
                Vec3::new(20.0, -20.0, -10.0),
                Vec3::new(20.0, 20.0, -10.0),
                Vec3::new(-20.0, 20.0, -10.0),
            ])),
            wall,
        );

        scene.add_light(Light::point(Vec3::new(1.0, 3.0, 3.0), Color::splat(200.0)));
        scene.add_light(Light::directional(
            Vec3::new(-1.0, -1.0, -1.0),
            Color::splat(200.0),
        ));

        scene
    }
}
