//! 시작 로그 포맷팅
//!
//! 서비스 레지스트리 초기화 진행 상황을 박스/트리 형태로 로그에 남깁니다.

const BOX_WIDTH: usize = 50;

/// 박스로 감싼 제목 문자열을 만듭니다.
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!("╔{border}╗\n║{title:^width$}║\n╚{border}╝", width = BOX_WIDTH)
}

pub fn print_boxed_title(title: &str) {
    log::info!("\n{}", boxed_title(title));
}

pub fn print_step_start(step: u8, description: &str) {
    log::info!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    log::info!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    log::info!("   ├─ {}: {}", name, status);
}

pub fn print_final_summary(repos: usize, services: usize) {
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    log::info!("   📦 Repositories: {}", repos);
    log::info!("   🔧 Services: {}", services);
    log::info!("   🚀 Total Components: {}", repos + services);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_has_three_lines() {
        let boxed = boxed_title("READY");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔'));
        assert!(lines[1].contains("READY"));
        assert!(lines[2].ends_with('╝'));
    }

    #[test]
    fn test_boxed_title_lines_share_width() {
        let boxed = boxed_title("SERVICE REGISTRY");
        let widths: Vec<usize> = boxed.lines().map(|line| line.chars().count()).collect();

        assert_eq!(widths, vec![BOX_WIDTH + 2; 3]);
    }
}
