use crate::core::rendering::material::Material;
use crate::core::rendering::shader::ShaderDataTypeValue;
use crate::core::utils::handle::Allocator;

// Materials only store a shader handle, so any live handle works for testing
// the parameter table
fn dummy_shader_handle() -> crate::core::utils::handle::Handle {
    let mut allocator = Allocator::<()>::new();
    allocator.allocate(())
}

#[test]
fn test_new_material_has_no_parameters() {
    let material = Material::new(dummy_shader_handle());
    assert!(material.get_parameter("roughness").is_none());
}

#[test]
fn test_set_parameter_stores_the_value() {
    let mut material = Material::new(dummy_shader_handle());
    material.set_parameter("roughness", ShaderDataTypeValue::Float(0.1));

    assert_eq!(
        material.get_parameter("roughness"),
        Some(&ShaderDataTypeValue::Float(0.1))
    );
}

#[test]
fn test_set_parameter_overwrites_previous_values() {
    let mut material = Material::new(dummy_shader_handle());
    material.set_parameter("metallic", ShaderDataTypeValue::Float(0.1));
    material.set_parameter("metallic", ShaderDataTypeValue::Float(0.9));

    assert_eq!(
        material.get_parameter("metallic"),
        Some(&ShaderDataTypeValue::Float(0.9))
    );
}

#[test]
fn test_parameters_are_independent_per_material() {
    let shader = dummy_shader_handle();
    let mut rough = Material::new(shader);
    let mut polished = Material::new(shader);

    rough.set_parameter("roughness", ShaderDataTypeValue::Float(0.9));
    polished.set_parameter("roughness", ShaderDataTypeValue::Float(0.1));

    assert_eq!(
        rough.get_parameter("roughness"),
        Some(&ShaderDataTypeValue::Float(0.9))
    );
    assert_eq!(
        polished.get_parameter("roughness"),
        Some(&ShaderDataTypeValue::Float(0.1))
    );
}
