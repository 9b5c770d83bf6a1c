use super::*;

struct FailingSource;

impl StatusSource for FailingSource {
    fn snapshot(&self) -> Result<StatusSnapshot, ShellError> {
        Err(ShellError::StatusUnavailable("probe timed out".to_owned()))
    }
}

fn header_text(source: &dyn StatusSource) -> Result<String, ShellError> {
    let snap = source.snapshot()?;
    Ok(format!("{} | {}", snap.system.label(), snap.latency_label()))
}

#[test]
fn static_source_reports_running_with_fixed_latency() {
    let snap = StaticStatusSource.snapshot().expect("static source never fails");
    assert_eq!(snap.system, SystemHealth::Running);
    assert_eq!(snap.latency_ms, Some(23));
    assert_eq!(snap.latency_label(), "Latency: 23ms");
}

#[test]
fn static_source_lists_three_services() {
    let snap = StaticStatusSource.snapshot().expect("static source never fails");
    let summary: Vec<_> = snap.services.iter().map(|c| (c.title.as_str(), c.status)).collect();
    assert_eq!(
        summary,
        vec![
            ("Backend", ServiceStatus::Operational),
            ("Frontend", ServiceStatus::Operational),
            ("MT5 Connection", ServiceStatus::Pending),
        ]
    );
}

#[test]
fn static_source_has_one_open_milestone() {
    let snap = StaticStatusSource.snapshot().expect("static source never fails");
    assert_eq!(snap.phase, "Foundation");
    let open: Vec<_> = snap.milestones.iter().filter(|m| !m.done).collect();
    assert_eq!(open.len(), 1);
    assert!(open[0].label.contains("Phase 2"));
}

#[test]
fn missing_latency_renders_placeholder() {
    let mut snap = StaticStatusSource.snapshot().expect("static source never fails");
    snap.latency_ms = None;
    assert_eq!(snap.latency_label(), "Latency: --");
}

#[test]
fn views_work_against_any_source() {
    assert_eq!(header_text(&StaticStatusSource).as_deref(), Ok("System running | Latency: 23ms"));
    assert_eq!(
        header_text(&FailingSource),
        Err(ShellError::StatusUnavailable("probe timed out".to_owned()))
    );
}

#[test]
fn status_classes_are_distinct() {
    assert_ne!(ServiceStatus::Operational.css_class(), ServiceStatus::Pending.css_class());
    assert_ne!(ServiceStatus::Pending.css_class(), ServiceStatus::Error.css_class());
    assert_ne!(SystemHealth::Running.css_class(), SystemHealth::Down.css_class());
}
