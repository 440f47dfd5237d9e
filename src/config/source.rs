// SPDX-License-Identifier: MPL-2.0
//! Reading options from loosely typed objects.
//!
//! Page scripts hand the widget plain objects whose fields may hold anything.
//! [`OptionSource`] abstracts over such an object, and the readers here decide
//! which fields count: only numbers become profile values, and `undefined` or
//! `null` mean the field was not given.

use super::MagnifierOptions;
use crate::lens::ProfileOverride;

/// Kind of value found under one key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue {
    Undefined,
    Null,
    Number(f64),
    Object,
    /// Strings, booleans, functions and anything else.
    Other,
}

impl RawValue {
    /// Whether the key was given at all.
    #[must_use]
    pub fn is_present(self) -> bool {
        !matches!(self, RawValue::Undefined | RawValue::Null)
    }

    #[must_use]
    pub fn number(self) -> Option<f64> {
        match self {
            RawValue::Number(value) => Some(value),
            _ => None,
        }
    }
}

/// An object whose properties can be looked up by name.
pub trait OptionSource: Sized {
    /// Classifies the property `key`.
    fn value(&self, key: &str) -> RawValue;

    /// The property `key`, if it holds an object.
    fn object(&self, key: &str) -> Option<Self>;
}

impl ProfileOverride {
    /// Reads `width`, `height` and `scale`, ignoring non-numeric fields.
    pub fn from_source(profile: &impl OptionSource) -> Self {
        Self {
            width: profile.value("width").number(),
            height: profile.value("height").number(),
            scale: profile.value("scale").number(),
        }
    }
}

impl MagnifierOptions {
    /// Reads the `desktop` and `mobile` profile objects.
    ///
    /// A profile entry that is not an object is treated as absent.
    pub fn from_source<S: OptionSource>(options: &S) -> Self {
        Self {
            desktop: options
                .object("desktop")
                .map(|profile| ProfileOverride::from_source(&profile)),
            mobile: options
                .object("mobile")
                .map(|profile| ProfileOverride::from_source(&profile)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum Field {
        Raw(RawValue),
        Object(FakeObject),
    }

    #[derive(Debug, Clone, Default)]
    struct FakeObject(Vec<(&'static str, Field)>);

    impl FakeObject {
        fn with(mut self, key: &'static str, value: RawValue) -> Self {
            self.0.push((key, Field::Raw(value)));
            self
        }

        fn with_object(mut self, key: &'static str, object: FakeObject) -> Self {
            self.0.push((key, Field::Object(object)));
            self
        }

        fn find(&self, key: &str) -> Option<&Field> {
            self.0.iter().find(|(k, _)| *k == key).map(|(_, field)| field)
        }
    }

    impl OptionSource for FakeObject {
        fn value(&self, key: &str) -> RawValue {
            match self.find(key) {
                Some(Field::Raw(value)) => *value,
                Some(Field::Object(_)) => RawValue::Object,
                None => RawValue::Undefined,
            }
        }

        fn object(&self, key: &str) -> Option<Self> {
            match self.find(key) {
                Some(Field::Object(object)) => Some(object.clone()),
                _ => None,
            }
        }
    }

    #[test]
    fn undefined_and_null_are_absent() {
        assert!(!RawValue::Undefined.is_present());
        assert!(!RawValue::Null.is_present());
        assert!(RawValue::Number(0.0).is_present());
        assert!(RawValue::Object.is_present());
        assert!(RawValue::Other.is_present());
    }

    #[test]
    fn only_numbers_become_profile_values() {
        let profile = FakeObject::default()
            .with("width", RawValue::Number(150.0))
            .with("height", RawValue::Other)
            .with("scale", RawValue::Null);
        let overrides = ProfileOverride::from_source(&profile);
        assert_eq!(overrides.width, Some(150.0));
        assert_eq!(overrides.height, None);
        assert_eq!(overrides.scale, None);
    }

    #[test]
    fn nested_object_field_is_ignored() {
        let profile = FakeObject::default().with_object("scale", FakeObject::default());
        assert_eq!(ProfileOverride::from_source(&profile), ProfileOverride::default());
    }

    #[test]
    fn missing_and_non_object_profiles_are_absent() {
        let options = FakeObject::default()
            .with("desktop", RawValue::Number(3.0))
            .with("mobile", RawValue::Null);
        assert_eq!(MagnifierOptions::from_source(&options), MagnifierOptions::default());
        assert_eq!(
            MagnifierOptions::from_source(&FakeObject::default()),
            MagnifierOptions::default()
        );
    }

    #[test]
    fn profiles_are_read_independently() {
        let options = FakeObject::default().with_object(
            "mobile",
            FakeObject::default()
                .with("width", RawValue::Number(80.0))
                .with("height", RawValue::Number(80.0)),
        );
        let parsed = MagnifierOptions::from_source(&options);
        assert_eq!(parsed.desktop, None);
        assert_eq!(
            parsed.mobile,
            Some(ProfileOverride {
                width: Some(80.0),
                height: Some(80.0),
                scale: None,
            })
        );

        let profiles = parsed.resolve_lenient();
        assert_eq!(profiles.mobile.width(), 80.0);
        assert_eq!(profiles.mobile.scale(), 2.0);
        assert_eq!(profiles.desktop.width(), 200.0);
    }

    #[test]
    fn non_finite_number_falls_back_when_resolved() {
        let options = FakeObject::default().with_object(
            "desktop",
            FakeObject::default().with("scale", RawValue::Number(f64::NAN)),
        );
        let profiles = MagnifierOptions::from_source(&options).resolve_lenient();
        assert_eq!(profiles.desktop.scale(), 2.0);
    }
}
