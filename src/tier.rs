use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TierKey {
    Stable,
    Moderate,
    High,
    Critical,
}

impl fmt::Display for TierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierKey::Stable => write!(f, "stable"),
            TierKey::Moderate => write!(f, "moderate"),
            TierKey::High => write!(f, "high"),
            TierKey::Critical => write!(f, "critical"),
        }
    }
}

/// A risk bucket over an inclusive score range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub key: TierKey,
    pub min_score: u32,
    pub max_score: u32,
    pub label: &'static str,
    /// 0 is the least severe.
    pub severity_rank: u8,
    pub advice: &'static str,
    pub banner: &'static str,
}

impl Tier {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min_score && score <= self.max_score
    }

    pub fn range_label(&self) -> String {
        format!("{} - {}", self.min_score, self.max_score)
    }
}

pub static TIERS: [Tier; 4] = [
    Tier {
        key: TierKey::Stable,
        min_score: 85,
        max_score: 100,
        label: "Nội tiết tố ổn định",
        severity_rank: 0,
        advice: "Nội tiết tố nữ trong cơ thể đang ở trạng thái ổn định. Bạn hãy duy trì lối sống lành mạnh: sinh hoạt nghỉ ngơi điều độ (ngủ 7-8 tiếng/ ngày), bổ sung dinh dưỡng cân bằng, tập luyện thể dục 3-5 lần/ tuần, khám sức khỏe định kỳ đều đặn.",
        banner: "Xuất sắc! Nội tiết tố của bạn đang ổn định. Hãy tiếp tục duy trì lối sống lành mạnh!",
    },
    Tier {
        key: TierKey::Moderate,
        min_score: 65,
        max_score: 84,
        label: "Nguy cơ thiếu hụt trung bình",
        severity_rank: 1,
        advice: "Cơ thể đã có dấu hiệu thiếu hụt nội tiết nữ nhẹ. Bạn nên bổ sung các thực phẩm giàu isoflavone, các vitamin đặc biệt nhóm B,E và chăm sóc chất lượng giấc ngủ, cân bằng cuộc sống, giảm stress. Hạn chế các chất kích thích như café, rượu bia, thuốc lá.",
        banner: "Tốt! Cơ thể có dấu hiệu thiếu hụt nhẹ. Hãy chú ý bổ sung dinh dưỡng và nghỉ ngơi.",
    },
    Tier {
        key: TierKey::High,
        min_score: 40,
        max_score: 64,
        label: "Nguy cơ thiếu hụt cao",
        severity_rank: 2,
        advice: "Bắt đầu có các biểu hiện thiếu hụt nội tiết nữ rõ rệt. Nên bổ sung nội tiết nữ thực vật, canxi, collagen, các vitamin và khoáng chất. Thay đổi lối sống lành mạnh. Khám sức khỏe định kỳ và lắng nghe tư vấn từ bác sĩ, dược sĩ.",
        banner: "Cần chú ý! Nguy cơ thiếu hụt cao. Hãy thay đổi lối sống và tham khảo ý kiến chuyên gia.",
    },
    Tier {
        key: TierKey::Critical,
        min_score: 0,
        max_score: 39,
        label: "Nguy cơ thiếu hụt nghiêm trọng",
        severity_rank: 3,
        advice: "Nội tiết nữ đã suy giảm nghiêm trọng. Cần lập kế hoạch chăm sóc chuyên sâu. Nếu đã mãn kinh hoặc cắt buồng trứng, hãy tham khảo bác sĩ nội tiết/sản phụ khoa để có giải pháp chăm sóc phù hợp nhất.",
        banner: "Cần hành động ngay! Nguy cơ thiếu hụt rất cao. Hãy tham khảo bác sĩ chuyên khoa.",
    },
];

/// Returns the tier whose range contains `score`.
///
/// A score outside every range lands in the most severe tier.
pub fn classify(score: u32) -> &'static Tier {
    classify_in(&TIERS, score)
}

pub fn classify_in(tiers: &'static [Tier], score: u32) -> &'static Tier {
    tiers
        .iter()
        .find(|t| t.contains(score))
        .unwrap_or_else(|| most_severe(tiers))
}

fn most_severe(tiers: &'static [Tier]) -> &'static Tier {
    tiers
        .iter()
        .max_by_key(|t| t.severity_rank)
        .unwrap_or(&TIERS[3])
}
