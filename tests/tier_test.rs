use hormone_check::tier::{classify, TierKey, TIERS};

#[test]
fn test_boundaries() {
    let cases = [
        (100, TierKey::Stable),
        (85, TierKey::Stable),
        (84, TierKey::Moderate),
        (65, TierKey::Moderate),
        (64, TierKey::High),
        (40, TierKey::High),
        (39, TierKey::Critical),
        (0, TierKey::Critical),
    ];
    for (score, key) in cases {
        assert_eq!(classify(score).key, key, "score {score}");
    }
}

#[test]
fn test_every_score_matches_exactly_one_tier() {
    for score in 0..=100u32 {
        let matching = TIERS.iter().filter(|t| t.contains(score)).count();
        assert_eq!(matching, 1, "score {score}");
    }
}

#[test]
fn test_out_of_range_falls_back_to_most_severe() {
    assert_eq!(classify(101).key, TierKey::Critical);
    assert_eq!(classify(u32::MAX).key, TierKey::Critical);
}

#[test]
fn test_severity_increases_as_score_drops() {
    let ranks: Vec<u8> = [90, 70, 50, 10]
        .iter()
        .map(|s| classify(*s).severity_rank)
        .collect();
    assert_eq!(ranks, vec![0, 1, 2, 3]);
}

#[test]
fn test_labels_and_advice() {
    assert_eq!(classify(92).label, "Nội tiết tố ổn định");
    assert_eq!(classify(70).label, "Nguy cơ thiếu hụt trung bình");
    assert_eq!(classify(45).label, "Nguy cơ thiếu hụt cao");
    assert_eq!(classify(5).label, "Nguy cơ thiếu hụt nghiêm trọng");
    assert!(classify(5).advice.contains("bác sĩ"));
    assert!(classify(92).banner.starts_with("Xuất sắc!"));
    assert_eq!(classify(70).range_label(), "65 - 84");
}
