//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Kubernetes 管理台",
        namespace: "命名空间",
        loading: "处理中...",
        error: "错误",
        dismiss_error: "按任意键继续",
        cancelled: "操作已取消。",
        result: "结果",
    },

    // ========================================================================
    // 资源类型
    // ========================================================================
    kinds: KindTexts {
        pod: KindName {
            singular: "Pod",
            plural: "Pod",
        },
        service_account: KindName {
            singular: "服务账号",
            plural: "服务账号",
        },
        role: KindName {
            singular: "角色",
            plural: "角色",
        },
        role_binding: KindName {
            singular: "角色绑定",
            plural: "角色绑定",
        },
    },

    // ========================================================================
    // 菜单
    // ========================================================================
    menu: MenuTexts {
        main_title: "主菜单",
        resource_group_title: "资源管理",

        resource_group: MenuEntry {
            title: "资源管理",
            description: "浏览所有资源类型",
        },
        health: MenuEntry {
            title: "健康检查",
            description: "节点状态、Pod 分布与容量",
        },
        usage: MenuEntry {
            title: "资源分析",
            description: "对比 requests 与实际使用量",
        },
        graph: MenuEntry {
            title: "依赖关系图",
            description: "生成命名空间的依赖关系图",
        },
        quit: MenuEntry {
            title: "退出",
            description: "退出程序",
        },

        open_category: MenuEntry {
            title: "{kinds}",
            description: "管理{kinds}",
        },

        list: MenuEntry {
            title: "列出{kinds}",
            description: "显示命名空间内的所有{kinds}",
        },
        create: MenuEntry {
            title: "创建{kind}",
            description: "新建一个{kind}",
        },
        delete: MenuEntry {
            title: "删除{kind}",
            description: "按名称删除{kind}",
        },
        describe: MenuEntry {
            title: "{kind} 详情",
            description: "查看{kind}的详细信息",
        },
        logs: MenuEntry {
            title: "{kind} 日志",
            description: "查看{kind}最近的日志",
        },
        back: MenuEntry {
            title: "返回",
            description: "返回主菜单",
        },
    },

    // ========================================================================
    // 输入向导
    // ========================================================================
    wizard: WizardTexts {
        title_create: "创建{kind}",
        title_delete: "删除{kind}",
        title_describe: "{kind} 详情",
        title_logs: "{kind} 日志",

        prompt_name: "名称",
        prompt_image: "容器镜像",
        prompt_namespace: "命名空间",
        prompt_role: "角色名称",
        prompt_service_account: "服务账号（name 或 namespace:name）",
        prompt_resources: "资源（逗号分隔）",
        prompt_verbs: "动作（逗号分隔）",
        prompt_confirm: "确认创建？(y/n)",

        default_hint: "默认值: {value}",
        submitted: "已提交，等待集群响应...",
        collected: "已填写",

        error_required: "此项为必填",
        error_image: "镜像不能为空且不能包含空格",
        error_list: "至少输入一个值",
        error_service_account: "格式为 name 或 namespace:name",
    },

    // ========================================================================
    // 报告
    // ========================================================================
    report: ReportTexts {
        name: "名称",
        namespace: "命名空间",
        phase: "状态",
        node: "节点",
        image: "镜像",
        created: "创建时间",
        secrets: "密钥",
        rules: "规则",
        role: "角色",
        subjects: "主体",
        readiness: "就绪",
        ready: "就绪",
        not_ready: "未就绪",
        none: "<无>",

        pod_ip: "IP",
        start_time: "启动时间",
        containers: "容器",

        node_status: "节点状态",
        version: "版本",
        os: "系统",
        pod_distribution: "命名空间 {namespace} 的 Pod 分布",
        unscheduled: "<未调度>",
        pods: "Pod 数",
        utilization: "资源容量",
        cpu: "CPU",
        memory: "内存",
        capacity: "容量",
        allocatable: "可分配",

        usage_title: "命名空间 {namespace} 的资源优化报告",
        requested: "请求",
        used: "使用",
        recommended: "推荐",
        savings: "可节省",
        summary: "汇总",
        total_cpu_savings: "CPU 可节省总量",
        total_memory_savings: "内存可节省总量",
        skipped: "无 metrics（已跳过）",
        no_metrics_rows: "没有找到带 metrics 的 Pod。",
    },

    // ========================================================================
    // 任务结果
    // ========================================================================
    status: StatusTexts {
        created: "{kind} {name} 已在命名空间 {namespace} 中创建成功",
        deleted: "{kind} {name} 已从命名空间 {namespace} 中删除",
        list_title: "命名空间 {namespace} 中的{kinds}",
        list_empty: "命名空间 {namespace} 中没有{kinds}。",
        logs_title: "{name} 的日志",
        logs_empty: "（没有日志输出）",
        graph_written: "依赖关系图已写入 {path}",
        graph_legend: "蓝色方框: Deployment | 绿色椭圆: Service | 黄色: ConfigMap | 粉色: Secret",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        navigate: "导航",
        select: "选择",
        back: "返回",
        quit: "退出",
        submit: "提交",
        cancel: "取消",
        scroll: "滚动",
        close: "关闭",
        dismiss: "关闭提示",
        force_quit: "强制退出",
    },
};
