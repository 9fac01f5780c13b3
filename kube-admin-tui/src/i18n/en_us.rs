//! English translations (en-US)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // Common
    // ========================================================================
    common: CommonTexts {
        app_name: "Kubernetes Admin",
        namespace: "namespace",
        loading: "Working...",
        error: "Error",
        dismiss_error: "Press any key to continue",
        cancelled: "Operation cancelled.",
        result: "Result",
    },

    // ========================================================================
    // Resource kinds
    // ========================================================================
    kinds: KindTexts {
        pod: KindName {
            singular: "Pod",
            plural: "Pods",
        },
        service_account: KindName {
            singular: "Service Account",
            plural: "Service Accounts",
        },
        role: KindName {
            singular: "Role",
            plural: "Roles",
        },
        role_binding: KindName {
            singular: "Role Binding",
            plural: "Role Bindings",
        },
    },

    // ========================================================================
    // Menus
    // ========================================================================
    menu: MenuTexts {
        main_title: "Main Menu",
        resource_group_title: "Resource Management",

        resource_group: MenuEntry {
            title: "Resource Management",
            description: "Browse every resource category",
        },
        health: MenuEntry {
            title: "Health Check",
            description: "Node status, pod distribution and capacity",
        },
        usage: MenuEntry {
            title: "Resource Usage",
            description: "Compare requests with live usage",
        },
        graph: MenuEntry {
            title: "Visualize Dependencies",
            description: "Write a dependency graph of the namespace",
        },
        quit: MenuEntry {
            title: "Quit",
            description: "Exit the application",
        },

        open_category: MenuEntry {
            title: "{kinds}",
            description: "Manage {kinds}",
        },

        list: MenuEntry {
            title: "List {kinds}",
            description: "Show all {kinds} in the namespace",
        },
        create: MenuEntry {
            title: "Create {kind}",
            description: "Create a new {kind}",
        },
        delete: MenuEntry {
            title: "Delete {kind}",
            description: "Delete a {kind} by name",
        },
        describe: MenuEntry {
            title: "{kind} Details",
            description: "Show details of a {kind}",
        },
        logs: MenuEntry {
            title: "{kind} Logs",
            description: "Show the latest log lines of a {kind}",
        },
        back: MenuEntry {
            title: "Back",
            description: "Return to the main menu",
        },
    },

    // ========================================================================
    // Wizard
    // ========================================================================
    wizard: WizardTexts {
        title_create: "Create {kind}",
        title_delete: "Delete {kind}",
        title_describe: "{kind} Details",
        title_logs: "{kind} Logs",

        prompt_name: "Name",
        prompt_image: "Container image",
        prompt_namespace: "Namespace",
        prompt_role: "Role name",
        prompt_service_account: "Service account (name or namespace:name)",
        prompt_resources: "Resources (comma separated)",
        prompt_verbs: "Verbs (comma separated)",
        prompt_confirm: "Create this resource? (y/n)",

        default_hint: "default: {value}",
        submitted: "Submitted, waiting for the cluster...",
        collected: "Collected",

        error_required: "This field is required",
        error_image: "Image must not be empty or contain spaces",
        error_list: "Enter at least one value",
        error_service_account: "Use name or namespace:name",
    },

    // ========================================================================
    // Reports
    // ========================================================================
    report: ReportTexts {
        name: "NAME",
        namespace: "NAMESPACE",
        phase: "STATUS",
        node: "NODE",
        image: "IMAGE",
        created: "CREATED",
        secrets: "SECRETS",
        rules: "RULES",
        role: "ROLE",
        subjects: "SUBJECTS",
        readiness: "READY",
        ready: "Ready",
        not_ready: "NotReady",
        none: "<none>",

        pod_ip: "IP",
        start_time: "Started",
        containers: "Containers",

        node_status: "Node Status",
        version: "VERSION",
        os: "OS",
        pod_distribution: "Pod distribution in namespace {namespace}",
        unscheduled: "<unscheduled>",
        pods: "PODS",
        utilization: "Resource Utilization",
        cpu: "CPU",
        memory: "MEMORY",
        capacity: "capacity",
        allocatable: "allocatable",

        usage_title: "Resource Optimization Report for namespace: {namespace}",
        requested: "REQUEST",
        used: "USAGE",
        recommended: "RECOMMENDED",
        savings: "SAVINGS",
        summary: "Summary",
        total_cpu_savings: "Total potential CPU savings",
        total_memory_savings: "Total potential memory savings",
        skipped: "No metrics (skipped)",
        no_metrics_rows: "No pods with metrics found.",
    },

    // ========================================================================
    // Task results
    // ========================================================================
    status: StatusTexts {
        created: "{kind} {name} created successfully in namespace {namespace}",
        deleted: "{kind} {name} deleted from namespace {namespace}",
        list_title: "{kinds} in namespace {namespace}",
        list_empty: "No {kinds} found in namespace {namespace}.",
        logs_title: "Logs of {name}",
        logs_empty: "(no log output)",
        graph_written: "Dependency graph written to {path}",
        graph_legend: "Blue boxes: Deployments | Green ellipses: Services | Yellow notes: ConfigMaps | Pink notes: Secrets",
    },

    // ========================================================================
    // Hints
    // ========================================================================
    hints: HintTexts {
        navigate: "Navigate",
        select: "Select",
        back: "Back",
        quit: "Quit",
        submit: "Submit",
        cancel: "Cancel",
        scroll: "Scroll",
        close: "Close",
        dismiss: "Dismiss",
        force_quit: "Force quit",
    },
};
