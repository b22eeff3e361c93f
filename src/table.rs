use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Single,
    Multi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub value: &'static str,
    pub points: u32,
}

/// One scored survey field together with its options and sentinels.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub step: &'static str,
    pub field: &'static str,
    pub kind: FieldKind,
    pub options: &'static [OptionSpec],
    /// The "nothing applies" answer. Always worth 0 points.
    pub normal: Option<&'static str>,
    /// The "something else" answer, worth a fixed non-zero amount.
    pub other: Option<&'static str>,
    /// Free-text field describing the "other" answer.
    pub other_detail: Option<&'static str>,
}

impl FieldSpec {
    pub fn key(&self) -> String {
        format!("{}.{}", self.step, self.field)
    }

    pub fn matches_key(&self, key: &str) -> bool {
        key.split_once('.')
            .is_some_and(|(step, field)| step == self.step && field == self.field)
    }

    pub fn points(&self, option: &str) -> u32 {
        self.options
            .iter()
            .find(|o| o.value == option)
            .map(|o| o.points)
            .unwrap_or(0)
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o.value == option)
    }

    pub fn position(&self, option: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == option)
    }

    pub fn is_sentinel(&self, option: &str) -> bool {
        self.normal == Some(option) || self.other == Some(option)
    }

    /// Applies a click on `value` to the current selection.
    ///
    /// Sentinels behave like radio buttons nested in the checkbox group:
    /// selecting one replaces the whole selection, and selecting any
    /// ordinary option drops both sentinels before toggling it. Single-select
    /// fields simply take the new value.
    pub fn toggle(&self, current: &[String], value: &str) -> Vec<String> {
        if self.kind == FieldKind::Single {
            return vec![value.to_string()];
        }

        if self.is_sentinel(value) {
            if current.iter().any(|v| v == value) {
                return current.iter().filter(|v| *v != value).cloned().collect();
            }
            return vec![value.to_string()];
        }

        let mut next: Vec<String> = current
            .iter()
            .filter(|v| !self.is_sentinel(v))
            .cloned()
            .collect();
        if let Some(pos) = next.iter().position(|v| v == value) {
            next.remove(pos);
        } else {
            next.push(value.to_string());
        }
        next
    }
}

/// Read-only mapping of `step.field` keys to per-option point costs.
#[derive(Debug, Clone, Copy)]
pub struct DeductionTable {
    fields: &'static [FieldSpec],
}

impl Default for DeductionTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl DeductionTable {
    /// The hormonal health survey table.
    pub fn standard() -> Self {
        DeductionTable { fields: FIELDS }
    }

    /// Builds a table over custom field definitions.
    pub fn from_fields(fields: &'static [FieldSpec]) -> Self {
        DeductionTable { fields }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.matches_key(key))
    }

    pub fn field_for(&self, step: &str, field: &str) -> Option<&'static FieldSpec> {
        self.fields
            .iter()
            .find(|f| f.step == step && f.field == field)
    }

    /// Points for one option. Unknown keys and options cost nothing.
    pub fn lookup(&self, key: &str, option: &str) -> u32 {
        self.field(key).map(|f| f.points(option)).unwrap_or(0)
    }

    /// Options of a field in declaration order, which is also display order.
    pub fn enumerate_options(&self, key: &str) -> &'static [OptionSpec] {
        self.field(key).map(|f| f.options).unwrap_or(&[])
    }
}

pub const NORMAL: &str = "Bình thường";
pub const NOT_USED: &str = "Không sử dụng";
pub const OTHER: &str = "Khác";

const fn opt(value: &'static str, points: u32) -> OptionSpec {
    OptionSpec { value, points }
}

const AGE: &[OptionSpec] = &[
    opt("Dưới 30 tuổi", 0),
    opt("30 - 34 tuổi", 3),
    opt("35 - 39 tuổi", 7),
    opt("40 - 44 tuổi", 12),
    opt("45 - 49 tuổi", 20),
    opt("50 - 54 tuổi", 30),
    opt("55 tuổi trở lên", 40),
];

const PHYSICAL_SIGNS: &[OptionSpec] = &[
    opt(
        "Rối loạn kinh nguyệt (chu kỳ không đều, kéo dài, vô kinh, ra ít, ...)",
        10,
    ),
    opt("Bốc hỏa, đổ mồ hôi đêm", 10),
    opt("Khô âm đạo, đau khi quan hệ", 10),
    opt("Giảm ham muốn tình dục", 7),
    opt("Mệt mỏi kéo dài không rõ nguyên nhân", 5),
    opt("Rụng tóc, da khô hơn rõ rệt", 5),
    opt("Tăng cân vùng bụng dù không ăn nhiều", 5),
    opt(NORMAL, 0),
    opt(OTHER, 5),
];

const PSYCHOLOGICAL_SIGNS: &[OptionSpec] = &[
    opt("Khó ngủ, mất ngủ, ngủ không sâu giấc", 5),
    opt("Tâm trạng thất thường, dễ cáu gắt", 5),
    opt("Giảm trí nhớ ngắn hạn, khó tập trung", 5),
    opt("Lo âu vô cớ", 5),
    opt(NORMAL, 0),
    opt(OTHER, 5),
];

const RISK_FACTORS: &[OptionSpec] = &[
    opt("Cắt tử cung hoặc buồng trứng sớm (< 45 tuổi)", 20),
    opt("Mãn kinh (12 tháng không có kinh)", 30),
    opt("Làm việc ca đêm, thiếu ngủ thường xuyên", 5),
    opt(
        "Căng thẳng mạn tính hoặc stress vì công việc, cuộc sống, gia đình",
        5,
    ),
    opt("Ăn kiêng cực đoan, sụt cân nhanh", 5),
    opt("Không vận động thể chất thường xuyên", 3),
    opt("Hút thuốc lá hoặc uống rượu thường xuyên", 5),
    opt(NORMAL, 0),
    opt(OTHER, 5),
];

const MEDICATIONS: &[OptionSpec] = &[
    opt(
        "Thuốc tránh thai nội tiết kết hợp (dùng liên tục từ 2 năm trở lên)",
        2,
    ),
    opt("Các thuốc corticoid (Prednisolone, Dexamethasone...)", 3),
    opt("Thuốc điều trị ung thư (hóa xạ trị, kháng hormone...)", 10),
    opt(
        "Thuốc chống trầm cảm hoặc an thần kinh (SSRI, antipsychotics)",
        2,
    ),
    opt("Thuốc điều trị cường giáp hoặc suy giáp", 2),
    opt("Sử dụng thuốc điều trị hiếm muộn / hỗ trợ sinh sản", 2),
    opt("Sử dụng thuốc chống co giật (như phenytoin, carbamazepin)", 3),
    opt(NOT_USED, 0),
    opt(OTHER, 5),
];

static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        step: "step2",
        field: "age",
        kind: FieldKind::Single,
        options: AGE,
        normal: None,
        other: None,
        other_detail: None,
    },
    FieldSpec {
        step: "step3",
        field: "physicalSigns",
        kind: FieldKind::Multi,
        options: PHYSICAL_SIGNS,
        normal: Some(NORMAL),
        other: Some(OTHER),
        other_detail: Some("otherPhysicalSigns"),
    },
    FieldSpec {
        step: "step4",
        field: "psychologicalSigns",
        kind: FieldKind::Multi,
        options: PSYCHOLOGICAL_SIGNS,
        normal: Some(NORMAL),
        other: Some(OTHER),
        other_detail: Some("otherPsychologicalSigns"),
    },
    FieldSpec {
        step: "step5",
        field: "riskFactors",
        kind: FieldKind::Multi,
        options: RISK_FACTORS,
        normal: Some(NORMAL),
        other: Some(OTHER),
        other_detail: Some("otherRiskFactors"),
    },
    FieldSpec {
        step: "step6",
        field: "medications",
        kind: FieldKind::Multi,
        options: MEDICATIONS,
        normal: Some(NOT_USED),
        other: Some(OTHER),
        other_detail: Some("otherMedications"),
    },
];
