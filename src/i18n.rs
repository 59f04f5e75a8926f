//! Localized labels and validation messages
//!
//! Persian is the default locale; English is available through the
//! `locale` configuration key.

use crate::state::{ErrorKind, FieldName};
use serde::{Deserialize, Serialize};

/// Display language for labels and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fa,
    En,
}

/// Fixed UI strings that are not tied to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiText {
    FormTitle,
    Submit,
    Reset,
    OpenCalendar,
    CloseCalendar,
    DropHint,
    UploadedFile,
    FileSize,
    Submitted,
    SubmitFailed,
    SelectPlaceholder,
}

/// Label shown in the field's border
pub fn field_label(locale: Locale, field: FieldName) -> &'static str {
    match locale {
        Locale::Fa => match field {
            FieldName::FullName => "نام و نام خانوادگی",
            FieldName::PhoneNumber => "شماره تلفن",
            FieldName::Email => "ایمیل",
            FieldName::BirthDate => "تاریخ تولد",
            FieldName::Gender => "جنسیت",
            FieldName::MilitaryStatus => "وضعیت نظام وظیفه",
            FieldName::AttachedFile => "فایل",
        },
        Locale::En => match field {
            FieldName::FullName => "Full name",
            FieldName::PhoneNumber => "Phone number",
            FieldName::Email => "Email",
            FieldName::BirthDate => "Birth date",
            FieldName::Gender => "Gender",
            FieldName::MilitaryStatus => "Military service status",
            FieldName::AttachedFile => "File",
        },
    }
}

/// Human-readable message for a failed rule on a field
pub fn error_message(locale: Locale, field: FieldName, kind: ErrorKind) -> &'static str {
    match locale {
        Locale::Fa => match (field, kind) {
            (FieldName::FullName, _) => "نام و نام خانوادگی الزامی است",
            (FieldName::PhoneNumber, ErrorKind::InvalidPhone) => {
                "شماره تلفن باید یک شماره موبایل معتبر ایرانی باشد"
            }
            (FieldName::PhoneNumber, _) => "شماره تلفن الزامی است",
            (FieldName::Email, ErrorKind::InvalidEmail) => "ایمیل معتبر نیست",
            (FieldName::Email, _) => "ایمیل الزامی است",
            (FieldName::BirthDate, ErrorKind::InvalidDate) => "تاریخ انتخاب شده معتبر نیست",
            (FieldName::BirthDate, _) => "تاریخ تولد الزامی است",
            (FieldName::Gender, ErrorKind::InvalidChoice) => "جنسیت انتخاب شده معتبر نیست",
            (FieldName::Gender, _) => "جنسیت الزامی است",
            (FieldName::MilitaryStatus, ErrorKind::InvalidChoice) => {
                "وضعیت نظام وظیفه انتخاب شده معتبر نیست"
            }
            (FieldName::MilitaryStatus, _) => "وضعیت نظام وظیفه الزامی است",
            (FieldName::AttachedFile, _) => "آپلود فایل الزامی است",
        },
        Locale::En => match (field, kind) {
            (FieldName::FullName, _) => "Full name is required",
            (FieldName::PhoneNumber, ErrorKind::InvalidPhone) => {
                "Phone number must be a valid Iranian mobile number"
            }
            (FieldName::PhoneNumber, _) => "Phone number is required",
            (FieldName::Email, ErrorKind::InvalidEmail) => "Email is not valid",
            (FieldName::Email, _) => "Email is required",
            (FieldName::BirthDate, ErrorKind::InvalidDate) => "Selected date is not valid",
            (FieldName::BirthDate, _) => "Birth date is required",
            (FieldName::Gender, ErrorKind::InvalidChoice) => "Selected gender is not valid",
            (FieldName::Gender, _) => "Gender is required",
            (FieldName::MilitaryStatus, ErrorKind::InvalidChoice) => {
                "Selected military service status is not valid"
            }
            (FieldName::MilitaryStatus, _) => "Military service status is required",
            (FieldName::AttachedFile, _) => "File upload is required",
        },
    }
}

/// Label for a select option value; unknown values are shown verbatim
pub fn choice_label(locale: Locale, value: &str) -> &str {
    let label = match locale {
        Locale::Fa => match value {
            "male" => "مرد",
            "female" => "زن",
            "completed" => "تمام شده",
            "exempted" => "معاف",
            "notCompleted" => "تمام نشده",
            _ => "",
        },
        Locale::En => match value {
            "male" => "Male",
            "female" => "Female",
            "completed" => "Completed",
            "exempted" => "Exempted",
            "notCompleted" => "Not completed",
            _ => "",
        },
    };
    if label.is_empty() {
        value
    } else {
        label
    }
}

pub fn ui_text(locale: Locale, text: UiText) -> &'static str {
    match locale {
        Locale::Fa => match text {
            UiText::FormTitle => "فرم ثبت نام",
            UiText::Submit => "ارسال",
            UiText::Reset => "پاک کردن",
            UiText::OpenCalendar => "باز کردن تقویم",
            UiText::CloseCalendar => "بستن تقویم",
            UiText::DropHint => "فایل خود را انتخاب کنید یا درگ کنید و رها کنید",
            UiText::UploadedFile => "فایل آپلود شده:",
            UiText::FileSize => "حجم:",
            UiText::Submitted => "فرم با موفقیت ارسال شد",
            UiText::SubmitFailed => "ارسال فرم ناموفق بود",
            UiText::SelectPlaceholder => "انتخاب کنید",
        },
        Locale::En => match text {
            UiText::FormTitle => "Registration",
            UiText::Submit => "Submit",
            UiText::Reset => "Reset",
            UiText::OpenCalendar => "Open calendar",
            UiText::CloseCalendar => "Close calendar",
            UiText::DropHint => "Choose a file or drag and drop it here",
            UiText::UploadedFile => "Uploaded file:",
            UiText::FileSize => "Size:",
            UiText::Submitted => "Form submitted successfully",
            UiText::SubmitFailed => "Form submission failed",
            UiText::SelectPlaceholder => "Select",
        },
    }
}

/// Persian month names, Farvardin first
pub const JALALI_MONTHS_FA: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

pub const JALALI_MONTHS_EN: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Month name for a 1-based Jalali month
pub fn month_name(locale: Locale, month: u32) -> &'static str {
    let names = match locale {
        Locale::Fa => &JALALI_MONTHS_FA,
        Locale::En => &JALALI_MONTHS_EN,
    };
    month
        .checked_sub(1)
        .and_then(|index| names.get(index as usize))
        .copied()
        .unwrap_or("")
}

/// Weekday headers starting on Saturday
pub fn weekday_headers(locale: Locale) -> [&'static str; 7] {
    match locale {
        Locale::Fa => ["ش", "ی", "د", "س", "چ", "پ", "ج"],
        Locale::En => ["Sa", "Su", "Mo", "Tu", "We", "Th", "Fr"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_persian() {
        assert_eq!(Locale::default(), Locale::Fa);
    }

    #[test]
    fn test_locale_deserializes_lowercase() {
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }

    #[test]
    fn test_phone_messages_differ_by_kind() {
        let required = error_message(Locale::En, FieldName::PhoneNumber, ErrorKind::Required);
        let invalid = error_message(Locale::En, FieldName::PhoneNumber, ErrorKind::InvalidPhone);
        assert_ne!(required, invalid);
    }

    #[test]
    fn test_persian_messages_match_form_texts() {
        assert_eq!(
            error_message(Locale::Fa, FieldName::Email, ErrorKind::InvalidEmail),
            "ایمیل معتبر نیست"
        );
        assert_eq!(
            error_message(Locale::Fa, FieldName::AttachedFile, ErrorKind::Required),
            "آپلود فایل الزامی است"
        );
    }

    #[test]
    fn test_choice_label_falls_back_to_value() {
        assert_eq!(choice_label(Locale::En, "male"), "Male");
        assert_eq!(choice_label(Locale::En, "other"), "other");
    }

    #[test]
    fn test_month_name_out_of_range_is_empty() {
        assert_eq!(month_name(Locale::En, 1), "Farvardin");
        assert_eq!(month_name(Locale::En, 12), "Esfand");
        assert_eq!(month_name(Locale::En, 0), "");
        assert_eq!(month_name(Locale::En, 13), "");
    }
}
