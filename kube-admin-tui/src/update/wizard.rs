//! 输入向导消息处理

use kube_admin_core::{ResourceKind, ResourceSpec};

use crate::backend::{Operation, Task};
use crate::i18n::t;
use crate::message::WizardMessage;
use crate::model::{split_list, App, StepOutcome, WizardAction, WizardSession, WizardStep};

/// 处理向导消息
pub fn update(app: &mut App, msg: WizardMessage) -> Option<Task> {
    let session = app.wizard.as_mut()?;

    match msg {
        WizardMessage::Input(c) => session.push_char(c),
        WizardMessage::Backspace => session.backspace(),
        WizardMessage::Cancel => {
            log::debug!("Wizard cancelled: {:?}", session.action);
            app.wizard = None;
            app.viewport.clear();
        }
        WizardMessage::Submit => match session.submit() {
            StepOutcome::Advanced | StepOutcome::Rejected | StepOutcome::Pending => {}
            StepOutcome::Declined => {
                let title = session.action.title();
                app.wizard = None;
                app.viewport.show(title, t().common.cancelled);
            }
            // 会话保留到任务完成，防止重复提交
            StepOutcome::Submit => {
                let operation = build_operation(session, &app.namespace);
                return Some(Task::wizard(operation));
            }
        },
    }

    None
}

/// 用已收集的字段组装远程操作
fn build_operation(session: &WizardSession, operating_namespace: &str) -> Operation {
    let field = |step: WizardStep| session.field(step).unwrap_or_default().to_string();
    let name = field(WizardStep::Name);
    let namespace = field(WizardStep::Namespace);

    match session.action {
        WizardAction::Create(ResourceKind::Pod) => Operation::Create(ResourceSpec::Pod {
            name,
            namespace,
            image: field(WizardStep::Image),
        }),
        WizardAction::Create(ResourceKind::ServiceAccount) => {
            Operation::Create(ResourceSpec::ServiceAccount { name, namespace })
        }
        WizardAction::Create(ResourceKind::Role) => Operation::Create(ResourceSpec::Role {
            name,
            namespace,
            resources: split_list(&field(WizardStep::Resources)),
            verbs: split_list(&field(WizardStep::Verbs)),
        }),
        WizardAction::Create(ResourceKind::RoleBinding) => {
            // `namespace:name` 或只写 `name`（与绑定同一命名空间）
            let account = field(WizardStep::ServiceAccount);
            let (subject_namespace, subject_name) = match account.split_once(':') {
                Some((ns, sa)) => (ns.to_string(), sa.to_string()),
                None => (namespace.clone(), account),
            };
            Operation::Create(ResourceSpec::RoleBinding {
                name,
                namespace,
                role: field(WizardStep::Role),
                subject_namespace,
                subject_name,
            })
        }
        WizardAction::Delete(kind) => Operation::Delete {
            kind,
            namespace: operating_namespace.to_string(),
            name,
        },
        WizardAction::DescribePod => Operation::DescribePod {
            namespace: operating_namespace.to_string(),
            name,
        },
        WizardAction::PodLogs => Operation::PodLogs {
            namespace: operating_namespace.to_string(),
            name,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::AppContext;

    fn answer_all(app: &mut App, answers: &[&str]) -> Option<Task> {
        let mut task = None;
        for text in answers {
            let session = app.wizard.as_mut().expect("wizard open");
            session.input = (*text).to_string();
            task = update(app, WizardMessage::Submit);
        }
        task
    }

    fn app_with(action: WizardAction) -> App {
        let mut app = App::new(&AppContext::default());
        app.namespace = "ops".into();
        app.wizard = Some(WizardSession::new(action));
        app
    }

    #[test]
    fn role_binding_subject_defaults_to_binding_namespace() {
        let mut app = app_with(WizardAction::Create(ResourceKind::RoleBinding));

        let task = answer_all(&mut app, &["read-pods", "reader", "deployer", "", "yes"]);

        assert_eq!(
            task.map(|t| t.operation),
            Some(Operation::Create(ResourceSpec::RoleBinding {
                name: "read-pods".into(),
                namespace: "default".into(),
                role: "reader".into(),
                subject_namespace: "default".into(),
                subject_name: "deployer".into(),
            }))
        );
    }

    #[test]
    fn role_binding_accepts_qualified_service_account() {
        let mut app = app_with(WizardAction::Create(ResourceKind::RoleBinding));

        let task = answer_all(&mut app, &["rb", "reader", "ci:builder", "apps", "Y"]);

        match task.map(|t| t.operation) {
            Some(Operation::Create(ResourceSpec::RoleBinding {
                subject_namespace,
                subject_name,
                ..
            })) => {
                assert_eq!(subject_namespace, "ci");
                assert_eq!(subject_name, "builder");
            }
            other => panic!("unexpected operation: {other:?}"),
        }
    }

    #[test]
    fn role_uses_default_rules() {
        let mut app = app_with(WizardAction::Create(ResourceKind::Role));

        let task = answer_all(&mut app, &["reader", "", "", "", "y"]);

        assert_eq!(
            task.map(|t| t.operation),
            Some(Operation::Create(ResourceSpec::Role {
                name: "reader".into(),
                namespace: "default".into(),
                resources: vec!["pods".into()],
                verbs: vec!["get".into(), "list".into(), "watch".into()],
            }))
        );
    }

    #[test]
    fn single_step_actions_use_operating_namespace() {
        let mut app = app_with(WizardAction::Delete(ResourceKind::Pod));

        let task = answer_all(&mut app, &["web-1"]);

        assert_eq!(
            task,
            Some(Task::wizard(Operation::Delete {
                kind: ResourceKind::Pod,
                namespace: "ops".into(),
                name: "web-1".into(),
            }))
        );
    }

    #[test]
    fn submitted_wizard_ignores_further_submits() {
        let mut app = app_with(WizardAction::PodLogs);
        assert!(answer_all(&mut app, &["web-1"]).is_some());

        assert!(update(&mut app, WizardMessage::Submit).is_none());
        assert!(app.wizard.is_some());
    }

    #[test]
    fn cancel_discards_session() {
        let mut app = app_with(WizardAction::Create(ResourceKind::Pod));
        answer_all(&mut app, &["web-1"]);

        update(&mut app, WizardMessage::Cancel);

        assert!(app.wizard.is_none());
        assert!(app.viewport.is_empty());
    }
}
