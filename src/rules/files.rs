//! Secrets detection rules for file operations
//!
//! Patterns are anchored on `/` or `^` so they hold at any directory depth.
//! Broad name-based guesses live in the strict tier.

use crate::config::SafetyLevel;
use crate::rules::Rule;

pub const FILE_RULES: &[Rule] = &[
    // ------------------------------------------------------------------
    // Critical: private keys and primary credential stores
    // ------------------------------------------------------------------
    Rule::file(
        "ssh-private-key",
        SafetyLevel::Critical,
        r"(?:^|/)\.ssh/id_[A-Za-z0-9_-]+$",
        "SSH private key",
    )
    .examples(&["/home/user/.ssh/id_rsa", "~/.ssh/id_ed25519"]),
    Rule::file(
        "ssh-private-key-copy",
        SafetyLevel::Critical,
        r"(?:^|/)id_(?:rsa|dsa|ecdsa|ed25519)(?:_sk)?$",
        "SSH private key outside ~/.ssh",
    )
    .examples(&["backup/keys/id_rsa"]),
    Rule::file(
        "env-file",
        SafetyLevel::Critical,
        r"(?:^|/)\.env$",
        "environment file with secrets",
    )
    .examples(&[".env", "/srv/app/.env"]),
    Rule::file(
        "env-variant",
        SafetyLevel::Critical,
        r"(?:^|/)\.env\.[\w.-]+$",
        "environment file variant with secrets",
    )
    .examples(&[".env.production", "config/.env.local"]),
    Rule::file(
        "aws-credentials",
        SafetyLevel::Critical,
        r"(?:^|/)\.aws/(?:credentials|config)$",
        "AWS credentials",
    )
    .examples(&["~/.aws/credentials"]),
    Rule::file(
        "gcp-credentials",
        SafetyLevel::Critical,
        r"(?:^|/)\.config/gcloud/(?:credentials\.db|access_tokens\.db|legacy_credentials(?:/.*)?|application_default_credentials\.json)$",
        "Google Cloud credentials",
    )
    .examples(&["/home/user/.config/gcloud/application_default_credentials.json"]),
    Rule::file(
        "azure-tokens",
        SafetyLevel::Critical,
        r"(?:^|/)\.azure/(?:accessTokens\.json|msal_token_cache\.(?:json|bin)|azureProfile\.json)$",
        "Azure access tokens",
    )
    .examples(&["~/.azure/msal_token_cache.json"]),
    Rule::file(
        "kube-config",
        SafetyLevel::Critical,
        r"(?:^|/)\.kube/config$",
        "Kubernetes config with cluster credentials",
    )
    .examples(&["~/.kube/config"]),
    Rule::file(
        "pem-file",
        SafetyLevel::Critical,
        r"\.pem$",
        "PEM key or certificate bundle",
    )
    .examples(&["certs/server.pem"]),
    Rule::file(
        "key-file",
        SafetyLevel::Critical,
        r"\.key$",
        "private key file",
    )
    .examples(&["tls/private.key"]),
    Rule::file(
        "pkcs12-file",
        SafetyLevel::Critical,
        r"\.(?:p12|pfx)$",
        "PKCS#12 key bundle",
    )
    .examples(&["signing/cert.p12"]),
    Rule::file(
        "keystore",
        SafetyLevel::Critical,
        r"\.(?:jks|keystore|bks)$",
        "Java/Android keystore",
    )
    .examples(&["android/release.keystore"]),
    Rule::file(
        "gpg-private-keys",
        SafetyLevel::Critical,
        r"(?:^|/)\.gnupg/(?:private-keys-v1\.d(?:/.*)?|secring\.gpg)$",
        "GPG private keyring",
    )
    .examples(&["~/.gnupg/secring.gpg"]),
    Rule::file(
        "git-credentials",
        SafetyLevel::Critical,
        r"(?:^|/)\.git-credentials$",
        "git credential store",
    )
    .examples(&["~/.git-credentials"]),
    Rule::file(
        "system-shadow",
        SafetyLevel::Critical,
        r"^/etc/(?:g?shadow-?|sudoers(?:\.d/[^/]+)?|master\.passwd)$",
        "system password hashes or sudo policy",
    )
    .examples(&["/etc/shadow", "/etc/sudoers"]),
    Rule::file(
        "ssh-host-key",
        SafetyLevel::Critical,
        r"^/etc/ssh/ssh_host_[a-z0-9]+_key$",
        "SSH host private key",
    )
    .examples(&["/etc/ssh/ssh_host_ed25519_key"]),
    // ------------------------------------------------------------------
    // High: tool config files that usually hold tokens
    // ------------------------------------------------------------------
    Rule::file(
        "netrc",
        SafetyLevel::High,
        r"(?:^|/)[._]netrc$",
        "network credentials file",
    )
    .examples(&["~/.netrc"]),
    Rule::file(
        "npmrc",
        SafetyLevel::High,
        r"(?:^|/)\.npmrc$",
        "npm auth token file",
    )
    .examples(&["~/.npmrc"]),
    Rule::file(
        "pypirc",
        SafetyLevel::High,
        r"(?:^|/)\.pypirc$",
        "PyPI credentials",
    )
    .examples(&["~/.pypirc"]),
    Rule::file(
        "pgpass",
        SafetyLevel::High,
        r"(?:^|/)\.pgpass$",
        "PostgreSQL password file",
    )
    .examples(&["~/.pgpass"]),
    Rule::file(
        "mysql-cnf",
        SafetyLevel::High,
        r"(?:^|/)\.my\.cnf$",
        "MySQL client credentials",
    )
    .examples(&["~/.my.cnf"]),
    Rule::file(
        "docker-config",
        SafetyLevel::High,
        r"(?:^|/)\.docker/config\.json$",
        "Docker registry credentials",
    )
    .examples(&["~/.docker/config.json"]),
    Rule::file(
        "dockercfg",
        SafetyLevel::High,
        r"(?:^|/)\.dockercfg$",
        "legacy Docker registry credentials",
    )
    .examples(&["~/.dockercfg"]),
    Rule::file(
        "cargo-credentials",
        SafetyLevel::High,
        r"(?:^|/)\.cargo/credentials(?:\.toml)?$",
        "crates.io token",
    )
    .examples(&["~/.cargo/credentials.toml"]),
    Rule::file(
        "gem-credentials",
        SafetyLevel::High,
        r"(?:^|/)\.gem/credentials$",
        "RubyGems API key",
    )
    .examples(&["~/.gem/credentials"]),
    Rule::file(
        "gh-hosts",
        SafetyLevel::High,
        r"(?:^|/)\.config/gh/hosts\.ya?ml$",
        "GitHub CLI OAuth token",
    )
    .examples(&["~/.config/gh/hosts.yml"]),
    Rule::file(
        "vault-token",
        SafetyLevel::High,
        r"(?:^|/)\.vault-token$",
        "Vault token",
    )
    .examples(&["~/.vault-token"]),
    Rule::file(
        "terraform-credentials",
        SafetyLevel::High,
        r"(?:^|/)(?:\.terraformrc|credentials\.tfrc\.json)$",
        "Terraform Cloud credentials",
    )
    .examples(&["~/.terraform.d/credentials.tfrc.json"]),
    Rule::file(
        "terraform-state",
        SafetyLevel::High,
        r"\.tfstate(?:\.backup)?$",
        "Terraform state contains resource secrets",
    )
    .examples(&["infra/terraform.tfstate"]),
    Rule::file(
        "terraform-vars",
        SafetyLevel::High,
        r"\.tfvars(?:\.json)?$",
        "Terraform variables often hold secrets",
    )
    .examples(&["infra/prod.tfvars"]),
    Rule::file(
        "credentials-json",
        SafetyLevel::High,
        r"(?:^|/)credentials\.json$",
        "credentials file",
    )
    .examples(&["client/credentials.json"]),
    Rule::file(
        "service-account",
        SafetyLevel::High,
        r"(?:^|/)[\w.-]*service[-_]?account[\w.-]*\.json$",
        "cloud service account key",
    )
    .examples(&["gcp-service-account.json"]),
    Rule::file(
        "secrets-file",
        SafetyLevel::High,
        r"(?:^|/)secrets?\.(?:json|ya?ml|toml|env|ini)$",
        "secrets file",
    )
    .examples(&["deploy/secrets.yaml", "secret.json"]),
    Rule::file(
        "ssh-authorized-keys",
        SafetyLevel::High,
        r"(?:^|/)\.ssh/authorized_keys2?$",
        "SSH authorized_keys grants login access",
    )
    .examples(&["~/.ssh/authorized_keys"]),
    Rule::file(
        "htpasswd",
        SafetyLevel::High,
        r"(?:^|/)\.htpasswd$",
        "HTTP basic auth password file",
    )
    .examples(&["/var/www/.htpasswd"]),
    Rule::file(
        "putty-key",
        SafetyLevel::High,
        r"\.ppk$",
        "PuTTY private key",
    )
    .examples(&["keys/server.ppk"]),
    Rule::file(
        "crypto-wallet",
        SafetyLevel::High,
        r"(?:^|/)wallet\.dat$",
        "cryptocurrency wallet",
    )
    .examples(&["~/.bitcoin/wallet.dat"]),
    Rule::file(
        "keychain",
        SafetyLevel::High,
        r"\.keychain(?:-db)?$",
        "macOS keychain",
    )
    .examples(&["~/Library/Keychains/login.keychain-db"]),
    Rule::file(
        "password-store",
        SafetyLevel::High,
        r"(?:^|/)\.password-store/",
        "pass password store",
    )
    .examples(&["~/.password-store/email/work.gpg"]),
    Rule::file(
        "s3-config",
        SafetyLevel::High,
        r"(?:^|/)(?:\.s3cfg|\.boto)$",
        "S3 client credentials",
    )
    .examples(&["~/.s3cfg"]),
    Rule::file(
        "composer-auth",
        SafetyLevel::High,
        r"(?:^|/)\.composer/auth\.json$",
        "Composer registry tokens",
    )
    .examples(&["~/.composer/auth.json"]),
    Rule::file(
        "shell-history",
        SafetyLevel::High,
        r"(?:^|/)\.(?:bash|zsh|sh|python|node_repl|psql|mysql)_history$",
        "shell history may contain secrets",
    )
    .examples(&["~/.zsh_history"]),
    // ------------------------------------------------------------------
    // Strict: broad guesses, opt-in
    // ------------------------------------------------------------------
    Rule::file(
        "ssh-directory",
        SafetyLevel::Strict,
        r"(?:^|/)\.ssh/",
        "file inside ~/.ssh",
    )
    .examples(&["~/.ssh/known_hosts"]),
    Rule::file(
        "gnupg-directory",
        SafetyLevel::Strict,
        r"(?:^|/)\.gnupg/",
        "file inside ~/.gnupg",
    )
    .examples(&["~/.gnupg/pubring.kbx"]),
    Rule::file(
        "aws-directory",
        SafetyLevel::Strict,
        r"(?:^|/)\.aws/",
        "file inside ~/.aws",
    )
    .examples(&["~/.aws/sso/cache/token.json"]),
    Rule::file(
        "kube-directory",
        SafetyLevel::Strict,
        r"(?:^|/)\.kube/",
        "file inside ~/.kube",
    )
    .examples(&["~/.kube/cache/discovery.json"]),
    Rule::file(
        "envrc",
        SafetyLevel::Strict,
        r"(?:^|/)\.envrc$",
        "direnv file may export secrets",
    )
    .examples(&["project/.envrc"]),
    Rule::file(
        "config-yaml",
        SafetyLevel::Strict,
        r"(?:^|/)config/[^/]+\.ya?ml$",
        "YAML under config/ may contain credentials",
    )
    .examples(&["app/config/database.yml"]),
    Rule::file(
        "settings-file",
        SafetyLevel::Strict,
        r"(?:^|/)(?:config|settings|application|appsettings)(?:\.[\w-]+)?\.(?:json|ya?ml|toml|properties|ini|conf)$",
        "configuration file may contain credentials",
    )
    .examples(&["src/main/resources/application.properties", "appsettings.Production.json"]),
    Rule::file(
        "compose-file",
        SafetyLevel::Strict,
        r"(?:^|/)(?:docker-)?compose(?:\.[\w-]+)?\.ya?ml$",
        "compose file may inline secrets",
    )
    .examples(&["docker-compose.prod.yml"]),
    Rule::file(
        "shell-profile",
        SafetyLevel::Strict,
        r"(?:^|/)\.(?:bashrc|bash_profile|zshrc|zprofile|profile)$",
        "shell profile may export secrets",
    )
    .examples(&["~/.zshrc"]),
    Rule::file(
        "certificate",
        SafetyLevel::Strict,
        r"\.(?:crt|cer|der)$",
        "certificate file",
    )
    .examples(&["certs/ca.crt"]),
    Rule::file(
        "system-passwd",
        SafetyLevel::Strict,
        r"^/etc/passwd$",
        "system user database",
    )
    .examples(&["/etc/passwd"]),
    Rule::file(
        "secret-named-file",
        SafetyLevel::Strict,
        r"(?i)(?:^|/)[^/]*(?:secret|credential|password|passwd|token|private[-_]?key)[^/]*$",
        "file name suggests secrets",
    )
    .examples(&["notes/db_password.txt", "api-token.txt"]),
];
