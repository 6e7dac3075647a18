use crate::camera_pipeline::common::error::ConversionError;
use crate::camera_pipeline::conversions::{map, map_raw, resolve_cv_type, source_to_view};
use crate::camera_pipeline::cv::CvType;
use crate::camera_pipeline::mat::{ElementType, ImageDescriptor, MatType, MemoryLocation, SourceMat};

fn patterned(width: usize, height: usize, mat_type: MatType) -> SourceMat {
    let len = width * height * mat_type.pixel_size();
    let data = (0..len).map(|i| (i % 251) as u8).collect();
    SourceMat::from_host(width, height, mat_type, data).unwrap()
}

#[test]
fn test_every_table_entry_resolves() {
    let expected = [
        (MatType::F32_C1, CvType::CV_32FC1),
        (MatType::F32_C2, CvType::CV_32FC2),
        (MatType::F32_C3, CvType::CV_32FC3),
        (MatType::F32_C4, CvType::CV_32FC4),
        (MatType::U8_C1, CvType::CV_8UC1),
        (MatType::U8_C2, CvType::CV_8UC2),
        (MatType::U8_C3, CvType::CV_8UC3),
        (MatType::U8_C4, CvType::CV_8UC4),
    ];

    for (source, target) in expected {
        assert_eq!(resolve_cv_type(source).unwrap(), target, "{source}");
        assert_eq!(target.channels(), source.channels);
        assert_eq!(target.elem_size(), source.pixel_size());
    }
}

#[test]
fn test_unmapped_types_are_rejected() {
    let unmapped = [
        MatType::new(ElementType::U16, 3),
        MatType::U16_C1,
        MatType::new(ElementType::U8, 0),
        MatType::new(ElementType::U8, 5),
        MatType::new(ElementType::F32, 0),
        MatType::new(ElementType::F32, 255),
    ];

    for mat_type in unmapped {
        let err = resolve_cv_type(mat_type).unwrap_err();
        assert!(
            matches!(err, ConversionError::InvalidFormat { element, channels }
                if element == mat_type.element && channels == mat_type.channels),
            "{mat_type} resolved to {err:?}"
        );
    }
}

#[test]
fn test_map_rejects_unmapped_type_before_touching_memory() {
    let descriptor = ImageDescriptor::packed(4, 4, MatType::new(ElementType::U16, 3));
    let data = vec![0u8; 4 * 4 * 6];

    let result = map(&descriptor, Some(data.as_slice()));

    assert!(matches!(result.unwrap_err(), ConversionError::InvalidFormat { .. }));
}

#[test]
fn test_dimensions_are_copied_verbatim() {
    for (width, height) in [(1, 1), (3, 7), (672, 376), (1920, 1080)] {
        let mat = SourceMat::new(width, height, MatType::U8_C1, MemoryLocation::Cpu).unwrap();
        let view = source_to_view(&mat).unwrap();

        assert_eq!(view.width(), width);
        assert_eq!(view.height(), height);
        assert_eq!(view.step(), mat.step_bytes());
    }
}

#[test]
fn test_view_shares_source_memory() {
    let mut mat = SourceMat::new(16, 8, MatType::U8_C3, MemoryLocation::Cpu).unwrap();
    mat.host_data_mut().unwrap()[0..3].copy_from_slice(&[0xDE, 0xAD, 0xBE]);

    let view = source_to_view(&mat).unwrap();

    assert_eq!(view.as_ptr(), mat.host_data().unwrap().as_ptr());
    assert_eq!(view.pixel(0, 0).unwrap(), &[0xDE, 0xAD, 0xBE]);
}

#[test]
fn test_map_is_idempotent() {
    let mat = patterned(10, 5, MatType::F32_C2);

    let first = source_to_view(&mat).unwrap();
    let second = source_to_view(&mat).unwrap();

    assert_eq!(first.cv_type(), second.cv_type());
    assert_eq!(first.as_ptr(), second.as_ptr());
    assert_eq!(first.data(), second.data());
}

#[test]
fn test_missing_host_memory_is_reported() {
    let descriptor = ImageDescriptor::packed(32, 32, MatType::U8_C4);
    assert!(matches!(map(&descriptor, None).unwrap_err(), ConversionError::NoHostBuffer));

    let mat = SourceMat::unallocated(32, 32, MatType::U8_C4);
    assert!(matches!(source_to_view(&mat).unwrap_err(), ConversionError::NoHostBuffer));
}

#[test]
fn test_null_pointer_is_not_dereferenced() {
    let descriptor = ImageDescriptor::packed(1280, 720, MatType::U8_C4);

    let result = unsafe { map_raw(&descriptor, std::ptr::null()) };

    assert!(matches!(result.unwrap_err(), ConversionError::NoHostBuffer));
}

#[test]
fn test_map_raw_views_foreign_buffer() {
    let data: Vec<u8> = (0..24).collect();
    let descriptor = ImageDescriptor::packed(3, 2, MatType::U8_C4);

    let view = unsafe { map_raw(&descriptor, data.as_ptr()) }.unwrap();

    assert_eq!(view.as_ptr(), data.as_ptr());
    assert_eq!(view.pixel(2, 1).unwrap(), &[20, 21, 22, 23]);
}

#[test]
fn test_hd720_bgra_frame() {
    let mut mat = SourceMat::new(1280, 720, MatType::U8_C4, MemoryLocation::Cpu).unwrap();
    mat.host_data_mut().unwrap()[0..4].copy_from_slice(&[12, 34, 56, 255]);

    let view = source_to_view(&mat).unwrap();

    assert_eq!(view.cv_type(), CvType::CV_8UC4);
    assert_eq!(view.cv_type().code(), 24);
    assert_eq!((view.width(), view.height()), (1280, 720));
    assert_eq!(view.pixel(0, 0).unwrap(), &[12, 34, 56, 255]);
    assert!(view.is_continuous());
}

#[test]
fn test_padded_rows_are_respected() {
    // 3 BGR pixels per row (9 bytes) padded to a 12 byte stride
    let mut data = vec![0u8; 12 * 2];
    data[12..15].copy_from_slice(&[7, 8, 9]);
    let descriptor = ImageDescriptor {
        width: 3,
        height: 2,
        mat_type: MatType::U8_C3,
        step: 12,
    };

    let view = map(&descriptor, Some(data.as_slice())).unwrap();

    assert!(!view.is_continuous());
    assert_eq!(view.row(1).unwrap().len(), 9);
    assert_eq!(view.pixel(0, 1).unwrap(), &[7, 8, 9]);
    assert!(view.pixel(3, 0).is_none());
    assert!(view.row(2).is_none());
    // last row needs no trailing padding
    assert_eq!(view.data().len(), 21);
}

#[test]
fn test_stride_smaller_than_row_is_rejected() {
    let descriptor = ImageDescriptor {
        width: 4,
        height: 2,
        mat_type: MatType::U8_C4,
        step: 15,
    };
    let data = vec![0u8; 64];

    let result = map(&descriptor, Some(data.as_slice()));

    assert!(matches!(
        result.unwrap_err(),
        ConversionError::InvalidStride { step: 15, min: 16 }
    ));
}

#[test]
fn test_short_host_buffer_is_rejected() {
    let descriptor = ImageDescriptor::packed(4, 4, MatType::F32_C1);
    let data = vec![0u8; 63];

    let result = map(&descriptor, Some(data.as_slice()));

    assert!(matches!(
        result.unwrap_err(),
        ConversionError::BufferTooSmall { required: 64, actual: 63 }
    ));
}

#[test]
fn test_zero_sized_descriptor_is_rejected() {
    let descriptor = ImageDescriptor::packed(0, 720, MatType::U8_C1);
    let result = map(&descriptor, Some(&[][..]));
    assert!(matches!(result.unwrap_err(), ConversionError::InvalidDimensions(0, 720)));
}

#[test]
fn test_float_pixels_keep_their_values() {
    let values = [1.5f32, -0.25, 1000.0, 0.0];
    let data: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
    let mat = SourceMat::from_host(2, 1, MatType::F32_C2, data).unwrap();

    let view = source_to_view(&mat).unwrap();

    assert_eq!(view.cv_type(), CvType::CV_32FC2);
    assert_eq!(view.pixel_f32(0, 0).unwrap(), vec![1.5, -0.25]);
    assert_eq!(view.pixel_f32(1, 0).unwrap(), vec![1000.0, 0.0]);
}

#[test]
fn test_integer_view_has_no_float_access() {
    let mat = patterned(2, 2, MatType::U8_C4);
    let view = source_to_view(&mat).unwrap();
    assert!(view.pixel_f32(0, 0).is_none());
}
