// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Semantic tag describing what kind of data a field collects. It selects the default
/// header / placeholder label (via [`ContentTypeLabeler`]) and whether the input is
/// masked. Immutable once the field is constructed.
///
/// Tags parse from their camelCase names, eg: `"emailAddress"`, `"oneTimeCode"`. Any
/// other string becomes [`ContentType::Other`], which has no default label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ContentType {
    Url,
    AddressCity,
    AddressCityAndState,
    AddressState,
    CountryName,
    CreditCardNumber,
    EmailAddress,
    FamilyName,
    FullStreetAddress,
    GivenName,
    JobTitle,
    Location,
    MiddleName,
    Name,
    NamePrefix,
    NameSuffix,
    Nickname,
    OrganizationName,
    PostalCode,
    StreetAddressLine1,
    StreetAddressLine2,
    Sublocality,
    TelephoneNumber,
    Username,
    Password,
    NewPassword,
    OneTimeCode,
    #[strum(default)]
    Other(String),
}

impl ContentType {
    /// Parse a tag. This never fails, unknown tags become [`ContentType::Other`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        Self::from_str(tag).unwrap_or_else(|_| ContentType::Other(tag.to_string()))
    }

    /// The tag this content type was (or would be) parsed from.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            ContentType::Other(tag) => tag.as_str(),
            _ => self.as_ref(),
        }
    }

    /// Whether input of this type is conventionally masked while typing.
    #[must_use]
    pub fn is_masked(&self) -> bool {
        matches!(self, ContentType::Password | ContentType::NewPassword)
    }
}

/// Maps a [`ContentType`] to a static English label, used for the header and placeholder
/// texts when the caller supplies neither.
#[derive(Debug)]
pub struct ContentTypeLabeler;

impl ContentTypeLabeler {
    /// Returns [`None`] for [`ContentType::Other`]. In that case the caller has to supply
    /// the header or placeholder text.
    #[must_use]
    pub fn label(content_type: &ContentType) -> Option<&'static str> {
        use ContentType::{AddressCity, AddressCityAndState, AddressState, CountryName,
                          CreditCardNumber, EmailAddress, FamilyName, FullStreetAddress,
                          GivenName, JobTitle, Location, MiddleName, Name, NamePrefix,
                          NameSuffix, NewPassword, Nickname, OneTimeCode,
                          OrganizationName, Other, Password, PostalCode,
                          StreetAddressLine1, StreetAddressLine2, Sublocality,
                          TelephoneNumber, Url, Username};

        let it = match content_type {
            Url => "URL",
            AddressCity | AddressCityAndState => "City",
            AddressState => "State",
            CountryName => "Country",
            CreditCardNumber => "Card Number",
            EmailAddress => "Email Address",
            FamilyName => "Family Name",
            FullStreetAddress => "Street",
            GivenName => "Given Name",
            JobTitle => "Job Title",
            Location => "Location",
            MiddleName => "Middle Name",
            Name => "Name",
            NamePrefix => "Name Prefix",
            NameSuffix => "Name Suffix",
            Nickname => "Nickname",
            OrganizationName => "Organization Name",
            PostalCode => "Postal Code",
            StreetAddressLine1 => "Street Address Line 1",
            StreetAddressLine2 => "Street Address Line 2",
            Sublocality => "Sublocality",
            TelephoneNumber => "Telephone Number",
            Username => "Username",
            Password => "Password",
            NewPassword => "New Password",
            OneTimeCode => "One Time Code",
            Other(_) => return None,
        };

        Some(it)
    }
}
