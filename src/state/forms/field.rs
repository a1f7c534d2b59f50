//! Form field keys and the field value record

/// How a field accepts and displays input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Multiline,
}

/// One of the five contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Address,
    ContactNumber,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::Address,
        Field::ContactNumber,
    ];

    /// Field at a display position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display position of this field
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Password => 2,
            Self::Address => 3,
            Self::ContactNumber => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Address => "Address",
            Self::ContactNumber => "Contact Number",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            Self::Name | Self::ContactNumber => InputKind::Text,
            Self::Email => InputKind::Email,
            Self::Password => InputKind::Password,
            Self::Address => InputKind::Multiline,
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.input_kind() == InputKind::Multiline
    }

    /// Whether this field has an inline error slot
    pub fn is_validated(&self) -> bool {
        matches!(self, Self::Email | Self::Password | Self::ContactNumber)
    }
}

/// The values currently entered in the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub contact_number: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Address => &self.address,
            Field::ContactNumber => &self.contact_number,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Address => &mut self.address,
            Field::ContactNumber => &mut self.contact_number,
        }
    }

    /// Replace one field's value
    pub fn set(&mut self, field: Field, value: String) {
        *self.get_mut(field) = value;
    }

    /// Text shown for a field, masking the password when asked
    pub fn display_value(&self, field: Field, mask_password: bool) -> String {
        let value = self.get(field);
        if field == Field::Password && mask_password {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }

    /// First required field left empty
    pub fn first_missing(&self) -> Option<Field> {
        [Field::Name, Field::Address]
            .into_iter()
            .find(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_through_all() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(Field::from_index(i), Some(*field));
        }
        assert_eq!(Field::from_index(5), None);
    }

    #[test]
    fn test_only_address_is_multiline() {
        let multiline: Vec<_> = Field::ALL.iter().filter(|f| f.is_multiline()).collect();
        assert_eq!(multiline, vec![&Field::Address]);
    }

    #[test]
    fn test_validated_fields() {
        assert!(!Field::Name.is_validated());
        assert!(Field::Email.is_validated());
        assert!(Field::Password.is_validated());
        assert!(!Field::Address.is_validated());
        assert!(Field::ContactNumber.is_validated());
    }

    #[test]
    fn test_set_updates_only_named_field() {
        let mut data = FormData::default();
        data.set(Field::Email, "a@b.c".to_string());
        assert_eq!(data.email, "a@b.c");
        assert_eq!(data.name, "");
        assert_eq!(data.get(Field::Email), "a@b.c");
    }

    #[test]
    fn test_password_display_is_masked() {
        let data = FormData {
            password: "abc12!".to_string(),
            ..Default::default()
        };
        assert_eq!(data.display_value(Field::Password, true), "******");
        assert_eq!(data.display_value(Field::Password, false), "abc12!");
    }

    #[test]
    fn test_first_missing_checks_name_then_address() {
        let mut data = FormData::default();
        assert_eq!(data.first_missing(), Some(Field::Name));
        data.name = "Jane".to_string();
        assert_eq!(data.first_missing(), Some(Field::Address));
        data.address = "1 Main St".to_string();
        assert_eq!(data.first_missing(), None);
    }
}
