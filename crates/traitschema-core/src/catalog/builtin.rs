//! Built-in class catalog: JupyterHub's configurable classes and a small demo module.

use super::{ClassCatalog, ClassDef, ModuleDef, TraitDef};
use crate::registry::{
    JUPYTERHUB_BYTE_SPECIFICATION, JUPYTERHUB_CALLABLE, JUPYTERHUB_COMMAND,
    JUPYTERHUB_ENTRY_POINT_TYPE, JUPYTERHUB_URL_PREFIX,
};
use crate::trait_type::TraitType;

pub(super) fn catalog() -> ClassCatalog {
    ClassCatalog::new()
        .with_module(demo())
        .with_module(jupyterhub_app())
        .with_module(jupyterhub_auth())
        .with_module(jupyterhub_spawner())
        .with_module(kubespawner())
}

fn demo() -> ModuleDef {
    ModuleDef::new("demo")
        .with_class(
            ClassDef::builder("Example")
                .with_trait(TraitDef::new("a", TraitType::bool()).help("toggle").config())
                .with_trait(
                    TraitDef::new(
                        "b",
                        TraitType::union([TraitType::int(), TraitType::unicode()]),
                    )
                    .allow_none()
                    .help("val")
                    .config(),
                )
                .with_trait(TraitDef::new("counter", TraitType::int()).help("not configurable"))
                .method("run")
                .build(),
        )
        .with_class(
            ClassDef::builder("Hooks")
                .with_trait(
                    TraitDef::new("c", TraitType::other("demo.HookCallable"))
                        .help("hook")
                        .config(),
                )
                .with_trait(TraitDef::new("label", TraitType::unicode()).help("label").config())
                .build(),
        )
}

fn jupyterhub_spawner() -> ModuleDef {
    let spawner = ClassDef::builder("Spawner")
        .constant("handler")
        .with_trait(
            TraitDef::new("start_timeout", TraitType::int())
                .help("Timeout (in seconds) before giving up on starting of single-user server.")
                .config(),
        )
        .with_trait(
            TraitDef::new("http_timeout", TraitType::int())
                .help("Timeout (in seconds) before giving up on a spawned HTTP server.")
                .config(),
        )
        .with_trait(
            TraitDef::new("poll_interval", TraitType::int())
                .help("Interval (in seconds) on which to poll the spawner for single-user server's status.")
                .config(),
        )
        .with_trait(
            TraitDef::new("cmd", TraitType::other(JUPYTERHUB_COMMAND))
                .help("The command used for starting the single-user server.")
                .config(),
        )
        .with_trait(
            TraitDef::new("args", TraitType::list())
                .help("Extra arguments to be passed to the single-user server.")
                .config(),
        )
        .with_trait(
            TraitDef::new("environment", TraitType::dict())
                .help("Extra environment variables to set for the single-user server's process.")
                .config(),
        )
        .with_trait(
            TraitDef::new("env_keep", TraitType::list())
                .help("List of environment variables for the single-user server to inherit from the JupyterHub process.")
                .config(),
        )
        .with_trait(
            TraitDef::new("mem_limit", TraitType::other(JUPYTERHUB_BYTE_SPECIFICATION))
                .allow_none()
                .help("Maximum number of bytes a single-user notebook server is allowed to use.")
                .config(),
        )
        .with_trait(
            TraitDef::new("cpu_limit", TraitType::float())
                .allow_none()
                .help("Maximum number of cpu-cores a single-user notebook server is allowed to use.")
                .config(),
        )
        .with_trait(
            TraitDef::new("notebook_dir", TraitType::unicode())
                .help("Path to the notebook directory for the single-user server.")
                .config(),
        )
        .with_trait(
            TraitDef::new("default_url", TraitType::unicode())
                .help("The URL the single-user server should start in.")
                .config(),
        )
        .with_trait(
            TraitDef::new("disable_user_config", TraitType::bool())
                .help("Disable per-user configuration of single-user servers.")
                .config(),
        )
        .with_trait(
            TraitDef::new("pre_spawn_hook", TraitType::any())
                .allow_none()
                .help("An optional hook function that you can implement to do some bootstrapping work before the spawner starts.")
                .config(),
        )
        .with_trait(
            TraitDef::new("post_stop_hook", TraitType::any())
                .allow_none()
                .help("An optional hook function that you can implement to do work after the spawner stops.")
                .config(),
        )
        .with_trait(
            TraitDef::new(
                "options_form",
                TraitType::union([TraitType::unicode(), TraitType::callable()]),
            )
            .help("An HTML form for options a user can specify on launching their server.")
            .config(),
        )
        .with_trait(
            TraitDef::new("consecutive_failure_limit", TraitType::int())
                .help("Maximum number of consecutive failures to allow before shutting down JupyterHub.")
                .config(),
        )
        .with_trait(
            TraitDef::new("ip", TraitType::unicode())
                .help("The IP address (or hostname) the single-user server should listen on.")
                .config(),
        )
        .with_trait(
            TraitDef::new("port", TraitType::int())
                .help("The port for single-user servers to listen on.")
                .config(),
        )
        .with_trait(TraitDef::new("server", TraitType::any()).allow_none())
        .with_trait(TraitDef::new("user", TraitType::any()))
        .method("start")
        .method("stop")
        .method("poll")
        .build();

    let local_process = ClassDef::builder("LocalProcessSpawner")
        .extends("jupyterhub.spawner", "Spawner")
        .with_trait(
            TraitDef::new("interrupt_timeout", TraitType::int())
                .help("Seconds to wait for single-user server process to halt after SIGINT.")
                .config(),
        )
        .with_trait(
            TraitDef::new("term_timeout", TraitType::int())
                .help("Seconds to wait for single-user server process to halt after SIGTERM.")
                .config(),
        )
        .with_trait(
            TraitDef::new("kill_timeout", TraitType::int())
                .help("Seconds to wait for process to halt after SIGKILL before giving up.")
                .config(),
        )
        .with_trait(
            TraitDef::new("popen_kwargs", TraitType::dict())
                .help("Extra keyword arguments to pass to Popen.")
                .config(),
        )
        .with_trait(
            TraitDef::new("shell_cmd", TraitType::other(JUPYTERHUB_COMMAND))
                .help("Specify a shell command to launch.")
                .config(),
        )
        .with_trait(TraitDef::new("pid", TraitType::int()))
        .build();

    ModuleDef::new("jupyterhub.spawner")
        .with_class(spawner)
        .with_class(local_process)
}

fn jupyterhub_auth() -> ModuleDef {
    let authenticator = ClassDef::builder("Authenticator")
        .with_trait(
            TraitDef::new("admin_users", TraitType::set())
                .help("Set of users that will be granted admin rights on this JupyterHub.")
                .config(),
        )
        .with_trait(
            TraitDef::new("allowed_users", TraitType::set())
                .help("Set of usernames that are allowed to log in.")
                .config(),
        )
        .with_trait(
            TraitDef::new("blocked_users", TraitType::set())
                .help("Set of usernames that are not allowed to log in.")
                .config(),
        )
        .with_trait(
            TraitDef::new("auto_login", TraitType::bool())
                .help("Automatically begin the login process rather than starting with a \"Login with...\" link.")
                .config(),
        )
        .with_trait(
            TraitDef::new("enable_auth_state", TraitType::bool())
                .help("Enable persisting auth_state (if available).")
                .config(),
        )
        .with_trait(
            TraitDef::new("username_pattern", TraitType::unicode())
                .help("Regular expression pattern that all valid usernames must match.")
                .config(),
        )
        .with_trait(
            TraitDef::new("username_map", TraitType::dict())
                .help("Dictionary mapping authenticator usernames to JupyterHub users.")
                .config(),
        )
        .with_trait(
            TraitDef::new("delete_invalid_users", TraitType::bool())
                .help("Delete any users from the database that do not pass validation.")
                .config(),
        )
        .with_trait(
            TraitDef::new("post_auth_hook", TraitType::any())
                .allow_none()
                .help("An optional hook function that you can implement to do some bootstrapping work during authentication.")
                .config(),
        )
        .method("authenticate")
        .method("normalize_username")
        .build();

    let pam = ClassDef::builder("PAMAuthenticator")
        .extends("jupyterhub.auth", "Authenticator")
        .with_trait(
            TraitDef::new("encoding", TraitType::unicode())
                .help("The text encoding to use when communicating with PAM.")
                .config(),
        )
        .with_trait(
            TraitDef::new("service", TraitType::unicode())
                .help("The name of the PAM service to use for authentication.")
                .config(),
        )
        .with_trait(
            TraitDef::new("open_sessions", TraitType::bool())
                .help("Whether to open a new PAM session when spawners are started.")
                .config(),
        )
        .with_trait(
            TraitDef::new("admin_groups", TraitType::set())
                .help("Authoritative list of user groups that determine admin access.")
                .config(),
        )
        .build();

    ModuleDef::new("jupyterhub.auth")
        .with_class(authenticator)
        .with_class(pam)
}

fn jupyterhub_app() -> ModuleDef {
    let hub = ClassDef::builder("JupyterHub")
        .with_trait(
            TraitDef::new("base_url", TraitType::other(JUPYTERHUB_URL_PREFIX))
                .help("The base URL of the entire application.")
                .config(),
        )
        .with_trait(
            TraitDef::new("bind_url", TraitType::unicode())
                .help("The public facing URL of the whole JupyterHub application.")
                .config(),
        )
        .with_trait(
            TraitDef::new("spawner_class", TraitType::other(JUPYTERHUB_ENTRY_POINT_TYPE))
                .help("The class to use for spawning single-user servers.")
                .config(),
        )
        .with_trait(
            TraitDef::new(
                "authenticator_class",
                TraitType::other(JUPYTERHUB_ENTRY_POINT_TYPE),
            )
            .help("Class for authenticating users.")
            .config(),
        )
        .with_trait(
            TraitDef::new(
                "cookie_secret",
                TraitType::union([TraitType::bytes(), TraitType::unicode()]),
            )
            .help("The cookie secret to use to encrypt cookies.")
            .config(),
        )
        .with_trait(
            TraitDef::new("concurrent_spawn_limit", TraitType::int())
                .help("Maximum number of concurrent users that can be spawning at a time.")
                .config(),
        )
        .with_trait(
            TraitDef::new("active_server_limit", TraitType::int())
                .help("Maximum number of concurrent servers that can be active at a time.")
                .config(),
        )
        .with_trait(
            TraitDef::new("db_url", TraitType::unicode())
                .help("url for the database. e.g. `sqlite:///jupyterhub.sqlite`")
                .config(),
        )
        .with_trait(
            TraitDef::new("load_roles", TraitType::list())
                .help("List of predefined role dictionaries to load at startup.")
                .config(),
        )
        .with_trait(
            TraitDef::new("services", TraitType::list())
                .help("List of service specification dictionaries.")
                .config(),
        )
        .with_trait(
            TraitDef::new("cleanup_servers", TraitType::bool())
                .help("Whether to shutdown single-user servers when the Hub shuts down.")
                .config(),
        )
        .with_trait(
            TraitDef::new(
                "default_url",
                TraitType::union([
                    TraitType::unicode(),
                    TraitType::other(JUPYTERHUB_CALLABLE),
                ]),
            )
            .help("The default URL for users when they arrive (e.g. when user directs to \"/\")")
            .config(),
        )
        .with_trait(
            TraitDef::new("log_level", TraitType::enumeration())
                .help("Set the log level by value or name.")
                .config(),
        )
        .with_trait(TraitDef::new("statsd", TraitType::any()))
        .method("start")
        .method("stop")
        .build();

    ModuleDef::new("jupyterhub.app").with_class(hub)
}

fn kubespawner() -> ModuleDef {
    let kube = ClassDef::builder("KubeSpawner")
        .extends("jupyterhub.spawner", "Spawner")
        .with_trait(
            TraitDef::new("namespace", TraitType::unicode())
                .help("Kubernetes namespace to spawn user pods in.")
                .config(),
        )
        .with_trait(
            TraitDef::new("image", TraitType::unicode())
                .help("Docker image to use for spawning user's containers.")
                .config(),
        )
        .with_trait(
            TraitDef::new("image_pull_policy", TraitType::enumeration())
                .help("The image pull policy of the docker container specified in `image`.")
                .config(),
        )
        .with_trait(
            TraitDef::new("cpu_guarantee", TraitType::float())
                .allow_none()
                .help("Minimum number of cpu-cores a single-user notebook server is guaranteed to have available.")
                .config(),
        )
        .with_trait(
            TraitDef::new("mem_guarantee", TraitType::other(JUPYTERHUB_BYTE_SPECIFICATION))
                .allow_none()
                .help("Minimum number of bytes a single-user notebook server is guaranteed to have available.")
                .config(),
        )
        .with_trait(
            TraitDef::new("node_selector", TraitType::dict())
                .help("The dictionary Selector labels used to match the Nodes where Pods will be launched.")
                .config(),
        )
        .with_trait(
            TraitDef::new("tolerations", TraitType::list())
                .help("List of tolerations that are to be assigned to the pod.")
                .config(),
        )
        .with_trait(
            TraitDef::new("extra_labels", TraitType::dict())
                .help("Extra kubernetes labels to set on the spawned single-user pods.")
                .config(),
        )
        .with_trait(
            TraitDef::new(
                "profile_list",
                TraitType::union([TraitType::list(), TraitType::callable()]),
            )
            .help("List of profiles to offer for selection by the user.")
            .config(),
        )
        .with_trait(
            TraitDef::new("modify_pod_hook", TraitType::callable())
                .allow_none()
                .help("Callable to augment the Pod object before launching.")
                .config(),
        )
        .with_trait(
            TraitDef::new("pod_name_template", TraitType::unicode())
                .help("Template to use to form the name of user's pods.")
                .config(),
        )
        .with_trait(
            TraitDef::new("services_enabled", TraitType::bool())
                .help("Enable fine-grained control over the Service created for the user pod.")
                .config(),
        )
        .with_trait(
            TraitDef::new("volumes", TraitType::list())
                .help("List of Kubernetes Volume specifications that will be mounted in the user pod.")
                .config(),
        )
        .with_trait(
            TraitDef::new("volume_mounts", TraitType::list())
                .help("List of paths on which to mount volumes in the user notebook's pod.")
                .config(),
        )
        .with_trait(
            TraitDef::new("working_dir", TraitType::unicode())
                .allow_none()
                .help("The working directory where the Notebook server will be started inside the container.")
                .config(),
        )
        .with_trait(
            TraitDef::new(
                "uid",
                TraitType::union([TraitType::int(), TraitType::callable()]),
            )
            .allow_none()
            .help("The UID to run the single-user server containers as.")
            .config(),
        )
        .with_trait(
            TraitDef::new(
                "fs_gid",
                TraitType::union([TraitType::int(), TraitType::callable()]),
            )
            .allow_none()
            .help("The GID of the group that should own any volumes that are created & mounted.")
            .config(),
        )
        .with_trait(
            TraitDef::new("k8s_api_request_timeout", TraitType::int())
                .help("API request timeout (in seconds) for all k8s API calls made by KubeSpawner.")
                .config(),
        )
        .with_trait(
            TraitDef::new("events_enabled", TraitType::bool())
                .help("Enable event-watching for progress-reports to the user spawn page.")
                .config(),
        )
        // narrows the inherited port default; still configurable
        .with_trait(
            TraitDef::new("port", TraitType::int())
                .help("The port for single-user servers to listen on. Defaults to 8888.")
                .config(),
        )
        .method("get_pod_manifest")
        .build();

    ModuleDef::new("kubespawner").with_class(kube)
}
