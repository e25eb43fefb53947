//! 터미널 출력 포맷팅 유틸리티
//!
//! 부트스트랩 단계와 시드 결과를 사람이 읽기 쉬운 형태로 출력합니다.
//! 로그와 별개로 표준 출력에 쓰이며, 포맷 문자열 생성은 테스트를 위해
//! `format_*` 함수로 분리되어 있습니다.

use std::collections::BTreeMap;
use crate::domain::entities::CollectionKind;

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  Seed Completed                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!("╔{}╗\n║{:^width$}║\n╚{}╝", border, title, border, width = BOX_WIDTH)
}

pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

/// 부트스트랩 단계 시작
///
/// ```text
/// → Step 1: Connecting to MongoDB
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 부트스트랩 단계 완료
pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 부트스트랩 단계 실패
pub fn print_step_failed(step: u8, description: &str, reason: &str) {
    println!("✗ Step {}: {} ({})", step, description, reason);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 컬렉션별 적재 건수 요약 문자열
///
/// ```text
///    ├─ users: 8
///    ├─ products: 5
///    ...
///    🧮 Total Documents: 30
/// ```
pub fn format_seed_summary(counts: &BTreeMap<CollectionKind, u64>) -> String {
    let mut lines: Vec<String> = counts
        .iter()
        .map(|(kind, count)| format!("   ├─ {}: {}", kind, count))
        .collect();

    let total: u64 = counts.values().sum();
    lines.push(format!("   🧮 Total Documents: {}", total));
    lines.join("\n")
}

/// 시드 완료 요약을 출력합니다
pub fn print_seed_summary(strategy: &str, counts: &BTreeMap<CollectionKind, u64>) {
    println!();
    print_boxed_title(&format!("🌱 SEED COMPLETED ({})", strategy));
    println!("{}", format_seed_summary(counts));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_has_three_lines() {
        let boxed = format_boxed_title("Seed");
        let lines: Vec<_> = boxed.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Seed"));
        assert!(lines[0].starts_with('╔'));
    }

    #[test]
    fn test_seed_summary_totals_counts() {
        let mut counts = BTreeMap::new();
        counts.insert(CollectionKind::Users, 8);
        counts.insert(CollectionKind::Products, 5);

        let summary = format_seed_summary(&counts);
        assert!(summary.contains("users: 8"));
        assert!(summary.contains("products: 5"));
        assert!(summary.ends_with("Total Documents: 13"));
    }
}
