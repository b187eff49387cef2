use crate::core::rendering::buffer::{BufferElement, BufferLayout};
use crate::core::rendering::shader::{ShaderDataType, ShaderDataTypeValue};

#[test]
fn test_data_type_sizes() {
    assert_eq!(ShaderDataType::Float.get_size(), 4);
    assert_eq!(ShaderDataType::Float2.get_size(), 8);
    assert_eq!(ShaderDataType::Float3.get_size(), 12);
    assert_eq!(ShaderDataType::Float4.get_size(), 16);
    assert_eq!(ShaderDataType::Mat3.get_size(), 36);
    assert_eq!(ShaderDataType::Mat4.get_size(), 64);
    assert_eq!(ShaderDataType::Int.get_size(), 4);
    assert_eq!(ShaderDataType::Bool.get_size(), 1);
    assert_eq!(ShaderDataType::None.get_size(), 0);
}

#[test]
fn test_component_counts() {
    let element = |data_type| BufferElement::new("attr".to_owned(), data_type, false);

    assert_eq!(element(ShaderDataType::Float).get_component_count(), 1);
    assert_eq!(element(ShaderDataType::Float2).get_component_count(), 2);
    assert_eq!(element(ShaderDataType::Float3).get_component_count(), 3);
    assert_eq!(element(ShaderDataType::Float4).get_component_count(), 4);
    assert_eq!(element(ShaderDataType::Mat3).get_component_count(), 9);
    assert_eq!(element(ShaderDataType::Mat4).get_component_count(), 16);
}

#[test]
fn test_layout_computes_offsets_and_stride() {
    let layout = BufferLayout::from_elements(vec![
        BufferElement::new("vPosition".to_owned(), ShaderDataType::Float3, false),
        BufferElement::new("vNormal".to_owned(), ShaderDataType::Float3, false),
        BufferElement::new("vUv".to_owned(), ShaderDataType::Float2, false),
    ]);

    let elements = layout.get_buffer_elements();
    assert_eq!(elements.len(), 3);
    assert_eq!(elements[0].get_offset(), 0);
    assert_eq!(elements[1].get_offset(), 12);
    assert_eq!(elements[2].get_offset(), 24);
    assert_eq!(layout.get_stride(), 32);
}

#[test]
fn test_empty_layout_has_zero_stride() {
    let layout = BufferLayout::default();
    assert_eq!(layout.get_stride(), 0);
    assert!(layout.get_buffer_elements().is_empty());
}

#[test]
fn test_value_data_types_match_their_variant() {
    assert_eq!(
        ShaderDataTypeValue::Float(1.0).data_type(),
        ShaderDataType::Float
    );
    assert_eq!(
        ShaderDataTypeValue::Float3(glam::Vec3::ONE).data_type(),
        ShaderDataType::Float3
    );
    assert_eq!(
        ShaderDataTypeValue::Mat4(glam::Mat4::IDENTITY).data_type(),
        ShaderDataType::Mat4
    );
    assert_eq!(ShaderDataTypeValue::Int(3).data_type(), ShaderDataType::Int);
}
