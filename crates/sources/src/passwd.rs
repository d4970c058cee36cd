//! User account lookup in the passwd database

use crate::host::Account;

pub(crate) const PASSWD_PATH: &str = "/etc/passwd";

/// Find the account with `uid` in passwd-formatted `data`.
///
/// Lines are `name:password:uid:gid:gecos:home:shell`; malformed lines are
/// ignored.
pub(crate) fn find_account(data: &str, uid: u32) -> Option<Account> {
    data.lines()
        .filter(|line| !line.starts_with('#'))
        .find_map(|line| {
            let fields: Vec<&str> = line.split(':').collect();
            if fields.len() < 7 {
                return None;
            }
            let line_uid: u32 = fields[2].parse().ok()?;
            (line_uid == uid).then(|| Account {
                name: fields[0].to_string(),
                shell: fields[6].to_string(),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWD: &str = "\
root:x:0:0:root:/root:/bin/bash
# comment:x:1000:1000::/:/bin/false
broken line
alice:x:1000:1000:Alice,,,:/home/alice:/usr/bin/zsh
nobody:x:65534:65534:nobody:/nonexistent:/usr/sbin/nologin
";

    #[test]
    fn test_finds_by_uid() {
        let account = find_account(PASSWD, 1000).unwrap();
        assert_eq!(account.name, "alice");
        assert_eq!(account.shell, "/usr/bin/zsh");
        assert_eq!(find_account(PASSWD, 0).unwrap().name, "root");
    }

    #[test]
    fn test_unknown_uid() {
        assert!(find_account(PASSWD, 4242).is_none());
        assert!(find_account("", 0).is_none());
    }
}
