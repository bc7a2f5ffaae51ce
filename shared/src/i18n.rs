//! Display copy for the supported languages.
//!
//! Static per-language bundles plus the handful of interpolated strings
//! (note counts, input bounds). Lookup never fails: an unrecognized code
//! falls back to Vietnamese, the default language.

use serde::{Deserialize, Serialize};

use crate::currency::{group_thousands, Grouping};
use crate::MAX_COUNT;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Vietnamese,
    English,
    Chinese,
}

impl Language {
    pub const ALL: [Language; 3] =
        [Language::Vietnamese, Language::English, Language::Chinese];

    /// The locale code used in the persisted language record.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Vietnamese => "vi",
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a persisted or sniffed locale code. Unrecognized codes yield
    /// `None`; callers apply the fallback order themselves.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "vi" => Some(Language::Vietnamese),
            "en" => Some(Language::English),
            "zh" => Some(Language::Chinese),
            _ => None,
        }
    }

    /// Native-script label shown in the language menu.
    pub fn native_label(&self) -> &'static str {
        match self {
            Language::Vietnamese => "Tiếng Việt",
            Language::English => "English",
            Language::Chinese => "简体中文",
        }
    }

    /// Thousands grouping for plain (non-currency) numbers.
    pub fn grouping(&self) -> Grouping {
        match self {
            Language::Vietnamese => Grouping::Dot,
            Language::English | Language::Chinese => Grouping::Comma,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Vietnamese
    }
}

/// Strings for the count-input sheet.
pub struct SheetCopy {
    pub denomination_label: &'static str,
    pub toggle_direct: &'static str,
    pub toggle_stepper: &'static str,
    pub count_label: &'static str,
    pub subtotal_label: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub invalid_count: &'static str,
    input_label: &'static str,
    max_count: &'static str,
}

/// Strings for the reset bar and confirmation sheet.
pub struct ResetCopy {
    pub button: &'static str,
    pub confirm_title: &'static str,
    pub confirm_message: &'static str,
    pub skip_label: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,
}

/// The full copy bundle for one language.
pub struct UiCopy {
    pub language: Language,
    pub title_suffix: &'static str,
    pub total_label: &'static str,
    pub grid_section_label: &'static str,
    pub empty_list_hint: &'static str,
    pub list_subtotal_label: &'static str,
    pub language_menu_label: &'static str,
    pub sheet: SheetCopy,
    pub reset: ResetCopy,
    note_unit: &'static str,
    denomination_unit: &'static str,
}

impl UiCopy {
    fn number(&self, value: u64) -> String {
        group_thousands(value, self.language.grouping())
    }

    /// "3 tờ" / "3 notes" / "3 张".
    pub fn notes_count(&self, count: u32) -> String {
        format!("{}{}", self.number(count as u64), self.note_unit)
    }

    /// "2 loại mệnh giá" / "2 denominations" / "2 种面额".
    pub fn denominations_count(&self, count: usize) -> String {
        format!("{}{}", self.number(count as u64), self.denomination_unit)
    }

    /// Label for the direct-entry field, carrying the accepted range.
    pub fn input_label(&self) -> String {
        self.sheet
            .input_label
            .replace("{max}", &self.number(MAX_COUNT as u64))
    }

    /// Error shown when a committed count exceeds the maximum.
    pub fn max_count_error(&self) -> String {
        self.sheet
            .max_count
            .replace("{max}", &self.number(MAX_COUNT as u64))
    }
}

static VI: UiCopy = UiCopy {
    language: Language::Vietnamese,
    title_suffix: "Công Cụ Đếm Tiền",
    total_label: "Tổng tiền",
    grid_section_label: "Chọn mệnh giá",
    empty_list_hint: "Các mệnh giá đã nhập sẽ hiển thị tại đây, chạm để chỉnh sửa.",
    list_subtotal_label: "Tổng phụ",
    language_menu_label: "Ngôn ngữ",
    sheet: SheetCopy {
        denomination_label: "Mệnh giá",
        toggle_direct: "Nhập trực tiếp",
        toggle_stepper: "Quay lại bước nhấn",
        count_label: "Số tờ",
        subtotal_label: "Tổng phụ",
        confirm: "Xác nhận",
        cancel: "Hủy",
        delete: "Xóa",
        invalid_count: "Vui lòng nhập số tờ hợp lệ",
        input_label: "Nhập số tờ (0 - {max})",
        max_count: "Tối đa {max} tờ",
    },
    reset: ResetCopy {
        button: "Xóa dữ liệu",
        confirm_title: "Xác nhận xóa toàn bộ dữ liệu?",
        confirm_message: "Thao tác này sẽ xóa tất cả mệnh giá đã nhập và dữ liệu lưu trữ.",
        skip_label: "Lần sau không hỏi lại",
        cancel: "Hủy",
        confirm: "Xóa sạch",
    },
    note_unit: " tờ",
    denomination_unit: " loại mệnh giá",
};

static EN: UiCopy = UiCopy {
    language: Language::English,
    title_suffix: "Cash Counter",
    total_label: "Total Amount",
    grid_section_label: "Choose denomination",
    empty_list_hint: "Entered denominations will appear here. Tap to edit.",
    list_subtotal_label: "Subtotal",
    language_menu_label: "Language",
    sheet: SheetCopy {
        denomination_label: "Denomination",
        toggle_direct: "Enter directly",
        toggle_stepper: "Back to stepper",
        count_label: "Count",
        subtotal_label: "Subtotal",
        confirm: "Confirm",
        cancel: "Cancel",
        delete: "Delete",
        invalid_count: "Please enter a valid note count",
        input_label: "Enter note count (0 - {max})",
        max_count: "Supports up to {max} notes",
    },
    reset: ResetCopy {
        button: "Clear All",
        confirm_title: "Clear all data?",
        confirm_message: "This will remove every entered denomination and clear local storage.",
        skip_label: "Don't ask again next time",
        cancel: "Cancel",
        confirm: "Clear now",
    },
    note_unit: " notes",
    denomination_unit: " denominations",
};

static ZH: UiCopy = UiCopy {
    language: Language::Chinese,
    title_suffix: "点钞工具",
    total_label: "总金额",
    grid_section_label: "选择面额",
    empty_list_hint: "录入的面额会显示在这里，点按即可修改。",
    list_subtotal_label: "小计",
    language_menu_label: "语言",
    sheet: SheetCopy {
        denomination_label: "面额",
        toggle_direct: "直接输入",
        toggle_stepper: "返回步进",
        count_label: "张数",
        subtotal_label: "小计",
        confirm: "确认",
        cancel: "取消",
        delete: "删除",
        invalid_count: "请输入有效张数",
        input_label: "输入张数 (0 - {max})",
        max_count: "最多支持 {max} 张",
    },
    reset: ResetCopy {
        button: "清空",
        confirm_title: "确认清空全部金额？",
        confirm_message: "此操作会移除所有已录入的面额并清除本地存储。",
        skip_label: "本次清空不再提示",
        cancel: "取消",
        confirm: "确认清空",
    },
    note_unit: " 张",
    denomination_unit: " 种面额",
};

/// Copy bundle for a language.
pub fn copy(language: Language) -> &'static UiCopy {
    match language {
        Language::Vietnamese => &VI,
        Language::English => &EN,
        Language::Chinese => &ZH,
    }
}

/// Copy bundle for a raw locale code, falling back to the default language
/// when the code is unrecognized.
pub fn copy_for_code(code: &str) -> &'static UiCopy {
    copy(Language::from_code(code).unwrap_or_default())
}
