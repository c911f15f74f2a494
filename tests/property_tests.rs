use proptest::prelude::*;
use site_squeeze::{derive_folder_name, minified_name, QualitySettings};

proptest! {
    #[test]
    fn quality_settings_accept_full_range(jpg in 0u8..=100u8, png in 0u8..=100u8) {
        prop_assert!(QualitySettings::new(jpg, png).is_ok());
    }

    #[test]
    fn quality_settings_reject_out_of_range(jpg in 101u8..=255u8, png in 0u8..=100u8) {
        prop_assert!(QualitySettings::new(jpg, png).is_err());
        prop_assert!(QualitySettings::new(png, jpg).is_err());
    }

    #[test]
    fn derived_folder_names_have_no_path_characters(target in "[a-z0-9./:-]{1,40}") {
        let name = derive_folder_name(&target);
        prop_assert!(!name.contains('/'));
        prop_assert!(!name.contains('.'));
    }

    #[test]
    fn minified_png_names_get_the_suffix(stem in "[a-zA-Z0-9_-]{1,12}") {
        let renamed = minified_name(&format!("{}.png", stem));
        prop_assert_eq!(renamed, format!("{}-min.png", stem));
    }

    #[test]
    fn minified_jpg_names_get_the_suffix(stem in "[a-zA-Z0-9_-]{1,12}") {
        let renamed = minified_name(&format!("{}.jpg", stem));
        prop_assert_eq!(renamed, format!("{}-min.jpg", stem));
    }

    #[test]
    fn other_extensions_pass_through(stem in "[a-zA-Z0-9_-]{1,12}") {
        let name = format!("{}.webp", stem);
        prop_assert_eq!(minified_name(&name), name.clone());
    }
}
