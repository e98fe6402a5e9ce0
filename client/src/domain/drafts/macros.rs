//! Declares typed draft forms together with their patch types.

/// Generate a draft form struct, its all-optional patch struct, and the
/// [`DraftForm`](crate::domain::drafts::DraftForm) merge between them.
///
/// Both structs use camelCase field names so stored drafts match the
/// storage format screens already read.
macro_rules! define_draft_form {
    (
        $(#[$outer:meta])*
        pub struct $form:ident / $patch:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $form {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        #[doc = concat!("Partial update for [`", stringify!($form), "`]; `None` leaves a field untouched.")]
        #[derive(Debug, Clone, Default, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        pub struct $patch {
            $(
                $(#[$field_meta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $crate::domain::drafts::DraftForm for $form {
            type Patch = $patch;

            fn merge(&mut self, patch: Self::Patch) {
                let $patch { $($field),* } = patch;
                $(
                    if let Some(value) = $field {
                        self.$field = value;
                    }
                )*
            }
        }
    };
}

pub(crate) use define_draft_form;

#[cfg(test)]
mod tests {
    use crate::domain::drafts::DraftForm;

    define_draft_form! {
        /// Two-field form used to check merge ordering.
        pub struct ContactForm / ContactPatch {
            full_name: String,
            guest_count: u32,
        }
    }

    #[test]
    fn merge_only_overwrites_supplied_fields() {
        let mut form = ContactForm {
            full_name: "Ada".to_owned(),
            guest_count: 2,
        };
        form.merge(ContactPatch {
            guest_count: Some(3),
            ..ContactPatch::default()
        });
        assert_eq!(form.full_name, "Ada");
        assert_eq!(form.guest_count, 3);
    }

    #[test]
    fn patch_rejects_unknown_fields() {
        let result = serde_json::from_str::<ContactPatch>(r#"{ "fullName": "Ada", "age": 3 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn fields_serialise_in_camel_case() {
        let value = serde_json::to_value(ContactForm::default()).expect("serialise");
        assert_eq!(value, serde_json::json!({ "fullName": "", "guestCount": 0 }));
    }
}
