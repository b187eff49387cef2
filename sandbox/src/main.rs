use std::path::PathBuf;

use glam::{Mat4, Vec3};
use proto_render::core::rendering::camera::Camera;
use proto_render::core::rendering::render_api::ShaderHandle;
use proto_render::core::rendering::shader::{ShaderDataType, ShaderDataTypeValue, ShaderSrc};
use proto_render::prelude::*;

const VERT_SHADER_PATH: &str = "resources/vertShader.txt";
const FRAG_SHADER_PATH: &str = "resources/fragShader.txt";

// Uniform names expected by the PBR shader pair
const UNIFORM_MODEL_MAT: &str = "modelMat";
const UNIFORM_VIEW_MAT: &str = "viewMat";
const UNIFORM_PROJ_MAT: &str = "projMat";
const UNIFORM_LIGHT_POS: &str = "worldSpaceLightPos";
const UNIFORM_ROUGHNESS: &str = "roughness";
const UNIFORM_METALLIC: &str = "metallic";

const LIGHT_POSITION: Vec3 = Vec3::new(2.0, 2.0, 4.0);

/// Where each cube instance sits in world space
const CUBE_OFFSETS: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(0.0, -0.7, 0.0),
    Vec3::new(-1.5, 0.0, 0.0),
    Vec3::new(-1.5, -0.7, 0.0),
];

/// Surface parameters (roughness, metallic) for each cube instance, covering
/// the four corners of the parameter space
const CUBE_SURFACES: [(f32, f32); 4] = [(0.1, 0.1), (0.9, 0.1), (0.1, 0.9), (0.9, 0.9)];

/// One drawable cube: where it goes and what its surface looks like
struct CubeInstance {
    model_matrix: Mat4,
    material: Material,
}

struct PbrScene {
    cube: Option<Mesh>,
    shader: Option<ShaderHandle>,
    instances: Vec<CubeInstance>,
    camera: Camera,
}

impl PbrScene {
    fn new() -> Self {
        PbrScene {
            cube: None,
            shader: None,
            instances: Vec::new(),
            camera: Camera::default(),
        }
    }
}

impl Layer for PbrScene {
    fn on_attach(&mut self) {
        let shader = match RenderCommand::create_shader(
            "pbr",
            ShaderSrc::File(PathBuf::from(VERT_SHADER_PATH)),
            ShaderSrc::File(PathBuf::from(FRAG_SHADER_PATH)),
        ) {
            Ok(shader) => shader,
            Err(error) => {
                // A failed build leaves this scene unable to render for the
                // rest of the process, so treat it as fatal instead of
                // drawing with an invalid program
                log::error!("Could not build the PBR shader program: {}", error);
                std::process::exit(1);
            }
        };

        for (name, data_type) in [
            (UNIFORM_MODEL_MAT, ShaderDataType::Mat4),
            (UNIFORM_VIEW_MAT, ShaderDataType::Mat4),
            (UNIFORM_PROJ_MAT, ShaderDataType::Mat4),
            (UNIFORM_LIGHT_POS, ShaderDataType::Float3),
            (UNIFORM_ROUGHNESS, ShaderDataType::Float),
            (UNIFORM_METALLIC, ShaderDataType::Float),
        ] {
            RenderCommand::add_shader_uniform(shader, name, data_type)
                .expect("Uniform names are registered exactly once");
        }

        self.cube = Some(Mesh::cube());
        self.instances = cube_instances(shader);
        self.shader = Some(shader);
    }

    fn on_detach(&mut self) {
        self.instances.clear();
        if let Some(cube) = self.cube.take() {
            cube.destroy();
        }
        if let Some(shader) = self.shader.take() {
            RenderCommand::destroy_shader(shader);
        }
    }

    fn update(&mut self, _delta_time: f32) {
        for (instance, offset) in self.instances.iter_mut().zip(CUBE_OFFSETS) {
            instance.model_matrix = cube_model_matrix(offset);
        }
    }

    fn render(&mut self) {
        let (Some(shader), Some(cube)) = (self.shader, self.cube.as_ref()) else {
            return;
        };

        RenderCommand::bind_shader(shader);
        RenderCommand::set_shader_uniform_fmat4(
            shader,
            UNIFORM_VIEW_MAT,
            &self.camera.view_matrix(),
        );
        RenderCommand::set_shader_uniform_fmat4(
            shader,
            UNIFORM_PROJ_MAT,
            &self.camera.projection_matrix(),
        );
        RenderCommand::set_shader_uniform_fvec3(shader, UNIFORM_LIGHT_POS, &LIGHT_POSITION);

        for instance in self.instances.iter() {
            instance.material.apply();
            RenderCommand::set_shader_uniform_fmat4(
                shader,
                UNIFORM_MODEL_MAT,
                &instance.model_matrix,
            );
            cube.draw();
        }

        RenderCommand::unbind_shader();
    }

    fn on_event(&mut self, _event: &mut Event) {}
}

/// Model matrix of a cube instance: rotated a quarter turn about Y, moved to
/// its offset and scaled to half size
fn cube_model_matrix(offset: Vec3) -> Mat4 {
    Mat4::from_axis_angle(Vec3::Y, 90.0_f32.to_radians())
        * Mat4::from_translation(offset)
        * Mat4::from_scale(Vec3::splat(0.5))
}

fn cube_instances(shader: ShaderHandle) -> Vec<CubeInstance> {
    CUBE_OFFSETS
        .iter()
        .zip(CUBE_SURFACES)
        .map(|(offset, (roughness, metallic))| {
            let mut material = Material::new(shader);
            material.set_parameter(UNIFORM_ROUGHNESS, ShaderDataTypeValue::Float(roughness));
            material.set_parameter(UNIFORM_METALLIC, ShaderDataTypeValue::Float(metallic));
            CubeInstance {
                model_matrix: cube_model_matrix(*offset),
                material,
            }
        })
        .collect()
}

fn main() {
    env_logger::init();

    App::initialize();
    WindowManager::init(
        WindowBuilder::new()
            .with_width(640)
            .with_height(640)
            .with_title("PBR Cubes".to_owned()),
        Platforms::Desktop,
    );
    Render::init();

    App::add_layer(Box::new(PbrScene::new()));

    App::run_application();

    Render::shutdown();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_model_matrices_are_deterministic() {
        for offset in CUBE_OFFSETS {
            assert_eq!(cube_model_matrix(offset), cube_model_matrix(offset));
        }
    }

    #[test]
    fn test_cube_model_matrices_are_distinct() {
        let matrices: Vec<Mat4> = CUBE_OFFSETS.iter().map(|o| cube_model_matrix(*o)).collect();
        for i in 0..matrices.len() {
            for j in (i + 1)..matrices.len() {
                assert_ne!(matrices[i], matrices[j]);
            }
        }
    }

    #[test]
    fn test_cube_model_matrix_scales_to_half_size() {
        let matrix = cube_model_matrix(Vec3::ZERO);
        let corner = matrix.transform_point3(Vec3::ONE);
        assert!((corner.length() - Vec3::splat(0.5).length()).abs() < 1e-6);
    }

    #[test]
    fn test_cube_surfaces_cover_parameter_corners() {
        assert_eq!(CUBE_SURFACES.len(), CUBE_OFFSETS.len());
        for (roughness, metallic) in CUBE_SURFACES {
            assert!(roughness == 0.1 || roughness == 0.9);
            assert!(metallic == 0.1 || metallic == 0.9);
        }

        // All four combinations are present exactly once
        let mut seen = std::collections::HashSet::new();
        for surface in CUBE_SURFACES {
            assert!(seen.insert(format!("{:?}", surface)));
        }
    }
}
