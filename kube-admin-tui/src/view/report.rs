//! 任务结果格式化
//!
//! 把 `TaskPayload` 转成查看区的标题与正文。纯函数，不读写 Model。

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthStr;

use kube_admin_core::types::{HealthReport, PodDetails, ResourceList, UsageReport};
use kube_admin_core::ResourceRef;

use crate::backend::TaskPayload;
use crate::i18n::{fill, fill_kind, kind_name, t};

/// 列之间的空白
const COLUMN_GAP: usize = 3;

/// 左对齐的纯文本表格
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// 按显示宽度（而非字节数）对齐，中文表头也能对齐
    fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.width());
                }
            }
        }

        let mut out = String::new();
        for line in std::iter::once(&self.headers).chain(&self.rows) {
            let mut text = String::new();
            for (i, cell) in line.iter().enumerate() {
                text.push_str(cell);
                if i + 1 < line.len() {
                    let pad = widths.get(i).copied().unwrap_or(0).saturating_sub(cell.width()) + COLUMN_GAP;
                    text.push_str(&" ".repeat(pad));
                }
            }
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }
}

fn timestamp(value: Option<&DateTime<Utc>>) -> String {
    value.map_or_else(
        || t().report.none.to_string(),
        |ts| ts.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

fn or_none(value: Option<&str>) -> String {
    value.unwrap_or(t().report.none).to_string()
}

fn millicores(value: i64) -> String {
    format!("{value}m")
}

fn mebibytes(bytes: i64) -> String {
    format!("{}Mi", bytes / (1024 * 1024))
}

/// 格式化任务结果，返回 (标题, 正文)
pub fn format_payload(payload: &TaskPayload) -> (String, String) {
    let status = &t().status;

    match payload {
        TaskPayload::Listing { namespace, list } => {
            let kinds = kind_name(list.kind()).plural;
            let args = [("kinds", kinds), ("namespace", namespace.as_str())];
            let title = fill(status.list_title, &args);
            if list.is_empty() {
                (title, fill(status.list_empty, &args))
            } else {
                (title, format_list(list))
            }
        }
        TaskPayload::Created(target) => (
            t().common.result.to_string(),
            resource_message(status.created, target),
        ),
        TaskPayload::Deleted(target) => (
            t().common.result.to_string(),
            resource_message(status.deleted, target),
        ),
        TaskPayload::PodDetails(details) => (details.name.clone(), format_pod_details(details)),
        TaskPayload::Logs { name, text } => {
            let title = fill(status.logs_title, &[("name", name.as_str())]);
            if text.trim().is_empty() {
                (title, status.logs_empty.to_string())
            } else {
                (title, text.clone())
            }
        }
        TaskPayload::Health(report) => (
            t().menu.health.title.to_string(),
            format_health(report),
        ),
        TaskPayload::Usage(report) => (
            fill(t().report.usage_title, &[("namespace", report.namespace.as_str())]),
            format_usage(report),
        ),
        TaskPayload::Graph(path) => {
            let path = path.display().to_string();
            (
                t().menu.graph.title.to_string(),
                format!(
                    "{}\n\n{}",
                    fill(status.graph_written, &[("path", path.as_str())]),
                    status.graph_legend
                ),
            )
        }
    }
}

fn resource_message(template: &str, target: &ResourceRef) -> String {
    let text = fill(
        template,
        &[("name", target.name.as_str()), ("namespace", target.namespace.as_str())],
    );
    fill_kind(&text, target.kind)
}

fn format_list(list: &ResourceList) -> String {
    let r = &t().report;

    let table = match list {
        ResourceList::Pods(pods) => {
            let mut table = Table::new([r.name, r.phase, r.node, r.image, r.created]);
            for pod in pods {
                table.row(vec![
                    pod.name.clone(),
                    pod.phase.clone(),
                    or_none(pod.node.as_deref()),
                    or_none(pod.image.as_deref()),
                    timestamp(pod.created_at.as_ref()),
                ]);
            }
            table
        }
        ResourceList::ServiceAccounts(accounts) => {
            let mut table = Table::new([r.name, r.secrets, r.created]);
            for sa in accounts {
                table.row(vec![
                    sa.name.clone(),
                    sa.secrets.to_string(),
                    timestamp(sa.created_at.as_ref()),
                ]);
            }
            table
        }
        ResourceList::Roles(roles) => {
            let mut table = Table::new([r.name, r.rules, r.created]);
            for role in roles {
                table.row(vec![
                    role.name.clone(),
                    role.rules.to_string(),
                    timestamp(role.created_at.as_ref()),
                ]);
            }
            table
        }
        ResourceList::RoleBindings(bindings) => {
            let mut table = Table::new([r.name, r.role, r.subjects, r.created]);
            for rb in bindings {
                let subjects = if rb.subjects.is_empty() {
                    r.none.to_string()
                } else {
                    rb.subjects.join(", ")
                };
                table.row(vec![
                    rb.name.clone(),
                    rb.role.clone(),
                    subjects,
                    timestamp(rb.created_at.as_ref()),
                ]);
            }
            table
        }
    };

    table.render()
}

fn format_pod_details(details: &PodDetails) -> String {
    let r = &t().report;
    let mut out = String::new();

    let fields = [
        (r.name, details.name.clone()),
        (r.namespace, details.namespace.clone()),
        (r.phase, details.phase.clone()),
        (r.pod_ip, or_none(details.pod_ip.as_deref())),
        (r.node, or_none(details.node.as_deref())),
        (r.start_time, timestamp(details.start_time.as_ref())),
    ];
    let label_width = fields.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    for (label, value) in &fields {
        let pad = " ".repeat(label_width - label.width());
        let _ = writeln!(out, "{label}:{pad} {value}");
    }

    let _ = writeln!(out, "\n{}:", r.containers);
    if details.containers.is_empty() {
        let _ = writeln!(out, "{}", r.none);
    } else {
        let mut table = Table::new([r.name, r.image, r.readiness]);
        for c in &details.containers {
            let ready = if c.ready { r.ready } else { r.not_ready };
            table.row(vec![c.name.clone(), c.image.clone(), ready.to_string()]);
        }
        out.push_str(&table.render());
    }

    out
}

fn format_health(report: &HealthReport) -> String {
    let r = &t().report;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} ({}/{} {})\n",
        r.node_status,
        report.ready_nodes,
        report.nodes.len(),
        r.ready
    );
    let mut nodes = Table::new([r.name, r.readiness, r.version, r.os]);
    for node in &report.nodes {
        let ready = if node.ready { r.ready } else { r.not_ready };
        nodes.row(vec![
            node.name.clone(),
            ready.to_string(),
            node.kubelet_version.clone(),
            node.operating_system.clone(),
        ]);
    }
    out.push_str(&nodes.render());

    let _ = writeln!(out, "\n{}\n", r.utilization);
    let mut capacity = Table::new([
        r.node.to_string(),
        format!("{} {}", r.cpu, r.capacity),
        format!("{} {}", r.cpu, r.allocatable),
        format!("{} {}", r.memory, r.capacity),
        format!("{} {}", r.memory, r.allocatable),
        format!("{} {}", r.pods, r.capacity),
        format!("{} {}", r.pods, r.allocatable),
    ]);
    for node in &report.nodes {
        capacity.row(vec![
            node.name.clone(),
            node.cpu_capacity.clone(),
            node.cpu_allocatable.clone(),
            node.memory_capacity.clone(),
            node.memory_allocatable.clone(),
            node.pods_capacity.clone(),
            node.pods_allocatable.clone(),
        ]);
    }
    out.push_str(&capacity.render());

    let _ = writeln!(
        out,
        "\n{}\n",
        fill(r.pod_distribution, &[("namespace", report.namespace.as_str())])
    );
    let mut distribution = Table::new([r.node, r.pods]);
    for entry in &report.distribution {
        let node = if entry.node.is_empty() {
            r.unscheduled.to_string()
        } else {
            entry.node.clone()
        };
        distribution.row(vec![node, entry.pods.to_string()]);
    }
    out.push_str(&distribution.render());

    out
}

fn format_usage(report: &UsageReport) -> String {
    let r = &t().report;
    let mut out = String::new();

    if report.rows.is_empty() {
        let _ = writeln!(out, "{}", r.no_metrics_rows);
    } else {
        let header = |resource: &str, column: &str| format!("{resource} {column}");
        let mut table = Table::new([
            r.name.to_string(),
            r.phase.to_string(),
            header(r.cpu, r.requested),
            header(r.cpu, r.used),
            header(r.cpu, r.recommended),
            header(r.cpu, r.savings),
            header(r.memory, r.requested),
            header(r.memory, r.used),
            header(r.memory, r.recommended),
            header(r.memory, r.savings),
        ]);
        for row in &report.rows {
            table.row(vec![
                row.pod.clone(),
                row.phase.clone(),
                millicores(row.cpu_request_millis),
                millicores(row.cpu_usage_millis),
                millicores(row.cpu_recommended_millis),
                millicores(row.cpu_savings_millis),
                mebibytes(row.memory_request_bytes),
                mebibytes(row.memory_usage_bytes),
                mebibytes(row.memory_recommended_bytes),
                mebibytes(row.memory_savings_bytes),
            ]);
        }
        out.push_str(&table.render());
    }

    let _ = writeln!(out, "\n{}:", r.summary);
    let _ = writeln!(
        out,
        "  {}: {}",
        r.total_cpu_savings,
        millicores(report.total_cpu_savings_millis)
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        r.total_memory_savings,
        mebibytes(report.total_memory_savings_bytes)
    );

    if !report.skipped.is_empty() {
        let _ = writeln!(out, "\n{}: {}", r.skipped, report.skipped.join(", "));
    }

    out
}
