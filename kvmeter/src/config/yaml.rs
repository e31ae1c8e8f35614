/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

use crate::types::TimeUnit;

use super::KvExporterConfig;

impl KvExporterConfig {
    pub fn parse_yaml(map: &yaml::Hash) -> anyhow::Result<Self> {
        let mut config = KvExporterConfig::default();
        foreach_kv(map, |k, v| config.set(k, v))?;
        config.check()?;
        Ok(config)
    }

    fn set(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match normalize_key(k).as_str() {
            "hosts" | "host" => {
                self.hosts = as_string_list(v).context(format!("invalid value for key {k}"))?;
                Ok(())
            }
            "namespace" => {
                self.namespace = as_string(v)?;
                Ok(())
            }
            "set_name" | "set" => {
                self.set_name = as_string(v)?;
                Ok(())
            }
            "prefix" => {
                self.prefix = Some(as_string(v)?);
                Ok(())
            }
            "batch_size" => {
                self.batch_size = as_usize(v)?;
                Ok(())
            }
            "step" | "export_interval" => {
                self.step = as_duration(v)
                    .context(format!("invalid humanize duration value for key {k}"))?;
                Ok(())
            }
            "base_time_unit" => {
                self.base_time_unit = TimeUnit::from_str(&as_string(v)?)
                    .context(format!("invalid time unit value for key {k}"))?;
                Ok(())
            }
            "write_policy" => {
                if let Yaml::Hash(map) = v {
                    foreach_kv(map, |k, v| self.set_write_policy(k, v))
                } else {
                    Err(anyhow!("yaml value type for key {k} should be 'map'"))
                }
            }
            "batch_policy" => {
                if let Yaml::Hash(map) = v {
                    foreach_kv(map, |k, v| self.set_batch_policy(k, v))
                } else {
                    Err(anyhow!("yaml value type for key {k} should be 'map'"))
                }
            }
            _ => Err(anyhow!("invalid key {k}")),
        }
    }

    fn set_write_policy(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match normalize_key(k).as_str() {
            "total_timeout" | "timeout" => {
                self.write_policy.total_timeout = Some(as_duration(v)?);
                Ok(())
            }
            "expiration" | "ttl" => {
                self.write_policy.expiration = Some(as_duration(v)?);
                Ok(())
            }
            "durable_delete" => {
                self.write_policy.durable_delete = as_bool(v)?;
                Ok(())
            }
            "send_key" => {
                self.write_policy.send_key = as_bool(v)?;
                Ok(())
            }
            _ => Err(anyhow!("invalid write policy key {k}")),
        }
    }

    fn set_batch_policy(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match normalize_key(k).as_str() {
            "total_timeout" | "timeout" => {
                self.batch_policy.total_timeout = Some(as_duration(v)?);
                Ok(())
            }
            "max_concurrent_nodes" => {
                self.batch_policy.max_concurrent_nodes = as_usize(v)?;
                Ok(())
            }
            "respond_all_keys" => {
                self.batch_policy.respond_all_keys = as_bool(v)?;
                Ok(())
            }
            _ => Err(anyhow!("invalid batch policy key {k}")),
        }
    }
}

fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

fn foreach_kv<F>(map: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    for (k, v) in map.iter() {
        let Yaml::String(key) = k else {
            return Err(anyhow!("unsupported key type: {k:?}"));
        };
        f(key, v)?;
    }
    Ok(())
}

fn as_string(v: &Yaml) -> anyhow::Result<String> {
    match v {
        Yaml::String(s) => Ok(s.to_string()),
        Yaml::Integer(i) => Ok(i.to_string()),
        _ => Err(anyhow!("yaml value type should be 'string'")),
    }
}

fn as_string_list(v: &Yaml) -> anyhow::Result<Vec<String>> {
    match v {
        Yaml::String(_) => Ok(vec![as_string(v)?]),
        Yaml::Array(seq) => seq.iter().map(as_string).collect(),
        _ => Err(anyhow!("yaml value type should be 'string' or 'array'")),
    }
}

fn as_usize(v: &Yaml) -> anyhow::Result<usize> {
    match v {
        Yaml::Integer(i) => usize::try_from(*i).map_err(|e| anyhow!("invalid usize value: {e}")),
        _ => Err(anyhow!("yaml value type should be 'integer'")),
    }
}

fn as_bool(v: &Yaml) -> anyhow::Result<bool> {
    match v {
        Yaml::Boolean(b) => Ok(*b),
        _ => Err(anyhow!("yaml value type should be 'boolean'")),
    }
}

fn as_duration(v: &Yaml) -> anyhow::Result<Duration> {
    match v {
        Yaml::String(value) => match humanize_rs::duration::parse(value) {
            Ok(v) => Ok(v),
            Err(humanize_rs::ParseError::MissingUnit) => {
                if let Ok(u) = u64::from_str(value) {
                    Ok(Duration::from_secs(u))
                } else {
                    Err(anyhow!("invalid duration string"))
                }
            }
            Err(e) => Err(anyhow!("invalid humanize duration string: {e}")),
        },
        Yaml::Integer(value) => u64::try_from(*value)
            .map(Duration::from_secs)
            .map_err(|_| anyhow!("out of range duration value")),
        _ => Err(anyhow!(
            "yaml value type for humanize duration should be 'string' or 'integer'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaml_rust::YamlLoader;

    fn parse(conf: &str) -> anyhow::Result<KvExporterConfig> {
        let docs = YamlLoader::load_from_str(conf).unwrap();
        let Yaml::Hash(map) = &docs[0] else {
            panic!("test config should be a map");
        };
        KvExporterConfig::parse_yaml(map)
    }

    #[test]
    fn full_config() {
        let config = parse(
            r#"
                hosts:
                  - 10.0.0.1:3000
                  - 10.0.0.2:3000
                namespace: metrics
                set_name: app
                prefix: myapp
                batch_size: 100
                step: 30s
                base_time_unit: ms
                write_policy:
                  ttl: 1h
                  send_key: true
                batch_policy:
                  max_concurrent_nodes: 4
            "#,
        )
        .unwrap();

        assert_eq!(config.hosts.len(), 2);
        assert_eq!(config.namespace, "metrics");
        assert_eq!(config.set_name, "app");
        assert_eq!(config.prefix.as_deref(), Some("myapp"));
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.step, Duration::from_secs(30));
        assert_eq!(config.base_time_unit, TimeUnit::Milliseconds);
        assert_eq!(
            config.write_policy.expiration,
            Some(Duration::from_secs(3600))
        );
        assert!(config.write_policy.send_key);
        assert_eq!(config.batch_policy.max_concurrent_nodes, 4);
    }

    #[test]
    fn single_host_string() {
        let config = parse("host: 192.168.1.1:3000").unwrap();
        assert_eq!(config.hosts, vec!["192.168.1.1:3000".to_string()]);
    }

    #[test]
    fn step_from_integer_seconds() {
        let config = parse("step: 10").unwrap();
        assert_eq!(config.step, Duration::from_secs(10));
    }

    #[test]
    fn invalid_key_rejected() {
        assert!(parse("no_such_key: 1").is_err());
    }

    #[test]
    fn zero_batch_size_rejected() {
        assert!(parse("batch_size: 0").is_err());
    }
}
