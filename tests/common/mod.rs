#![allow(dead_code)]

use hormone_check::answers::AnswerSet;

pub const HOT_FLASHES: &str = "Bốc hỏa, đổ mồ hôi đêm";
pub const INSOMNIA: &str = "Khó ngủ, mất ngủ, ngủ không sâu giấc";
pub const MENOPAUSE: &str = "Mãn kinh (12 tháng không có kinh)";

pub fn fill_profile(answers: &mut AnswerSet) {
    answers.set("step1", "fullName", "Trần Thị Mai");
    answers.set("step1", "gender", "Nữ");
    answers.set("step1", "occupation", "Giáo viên");
    answers.set("step1", "phoneNumber", "0912345678");
    answers.set("step1", "address", "Đà Nẵng");
}

/// A fully valid submission scoring 100 - 20 - 10 - 5 - 0 - 0 = 65.
pub fn complete_answers() -> AnswerSet {
    let mut answers = AnswerSet::new();
    fill_profile(&mut answers);
    answers.set("step2", "age", "45 - 49 tuổi");
    answers.set("step3", "physicalSigns", vec![HOT_FLASHES]);
    answers.set("step4", "psychologicalSigns", vec![INSOMNIA]);
    answers.set("step5", "riskFactors", vec!["Bình thường"]);
    answers.set("step6", "medications", vec!["Không sử dụng"]);
    answers
}
