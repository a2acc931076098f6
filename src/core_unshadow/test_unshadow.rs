// Merge behavior on realistic passwd/shadow content

#[cfg(test)]
mod tests {
    use super::super::error::Listing;
    use super::super::records::SkipReason;
    use super::super::*;
    use std::collections::BTreeSet;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    const PASSWD: &str = "alice:x:1000:1000:Alice:/home/alice:/bin/bash\nbob:x:1001:1001:Bob:/home/bob:/bin/bash";
    const SHADOW: &str = "alice:$6$abc$hash1:19000:0:99999:7:::\ncarol:$6$xyz$hash2:19000:0:99999:7:::";

    #[test]
    fn test_merge_alice_only() {
        let merged = merge(PASSWD, SHADOW).unwrap();
        assert_eq!(merged, "alice:$6$abc$hash1:1000:1000:Alice:/home/alice:/bin/bash\n");
    }

    #[test]
    fn test_merge_both_empty() {
        let err = merge("", "").unwrap_err();
        assert!(err.is_no_match());
    }

    #[test]
    fn test_merge_one_side_empty() {
        assert!(merge(PASSWD, "").unwrap_err().is_no_match());
        assert!(merge("", SHADOW).unwrap_err().is_no_match());
    }

    #[test]
    fn test_merge_only_comments_and_blanks() {
        let passwd = "# system accounts\n\n   \n#alice:x:1000:1000:Alice:/home/alice:/bin/bash\n";
        let shadow = "\n# shadow\nalice:$6$abc$hash1:19000:0:99999:7:::\n";
        assert!(merge(passwd, shadow).unwrap_err().is_no_match());
    }

    #[test]
    fn test_merge_no_shared_users() {
        let shadow = "dave:$1$salt$hash:19000:0:99999:7:::";
        let err = merge(PASSWD, shadow).unwrap_err();
        assert!(matches!(err, UnshadowError::NoMatchingUsers));
    }

    #[test]
    fn test_merge_drops_malformed_account_line() {
        let passwd = "broken:x:1\nalice:x:1000:1000:Alice:/home/alice:/bin/bash\n";
        let merged = merge(passwd, SHADOW).unwrap();
        assert_eq!(merged, "alice:$6$abc$hash1:1000:1000:Alice:/home/alice:/bin/bash\n");
    }

    #[test]
    fn test_merge_drops_malformed_shadow_line() {
        let shadow = "bob\nalice:$6$abc$hash1:19000:0:99999:7:::";
        let report = merge_with_report(PASSWD, shadow).unwrap();
        assert_eq!(report.merged_users, vec!["alice"]);
        assert_eq!(report.unmatched_accounts, vec!["bob"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].listing, Listing::Secret);
        assert_eq!(report.skipped[0].line_number, 1);
    }

    #[test]
    fn test_merge_last_account_wins_in_first_position() {
        let passwd = "\
alice:x:1000:1000:Alice:/home/alice:/bin/bash
bob:x:1001:1001:Bob:/home/bob:/bin/bash
alice:x:2000:1000:Alice:/home/alice:/bin/zsh
";
        let shadow = "bob:$1$b$hb\nalice:$1$a$ha\n";
        let merged = merge(passwd, shadow).unwrap();
        assert_eq!(
            merged,
            "alice:$1$a$ha:2000:1000:Alice:/home/alice:/bin/zsh\nbob:$1$b$hb:1001:1001:Bob:/home/bob:/bin/bash\n"
        );
    }

    #[test]
    fn test_merge_last_secret_wins() {
        let shadow = "alice:$1$old$h\nalice:$1$new$h\n";
        let merged = merge(PASSWD, shadow).unwrap();
        assert!(merged.starts_with("alice:$1$new$h:"));
    }

    #[test]
    fn test_merge_output_follows_passwd_order() {
        let passwd = "\
zed:x:3:3:Z:/home/zed:/bin/sh
amy:x:1:1:A:/home/amy:/bin/sh
mia:x:2:2:M:/home/mia:/bin/sh
";
        let shadow = "amy:h1\nmia:h2\nzed:h3\n";
        let merged = merge(passwd, shadow).unwrap();
        let users: Vec<&str> = merged
            .lines()
            .map(|line| line.split(':').next().unwrap())
            .collect();
        assert_eq!(users, vec!["zed", "amy", "mia"]);
    }

    #[test]
    fn test_merge_is_inner_join() {
        let passwd = "\
root:x:0:0:root:/root:/bin/bash
daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin
short:x:5:5
alice:x:1000:1000:Alice:/home/alice:/bin/bash
";
        let shadow = "\
root:$6$r$rr:19000:0:99999:7:::
short:$6$s$ss:19000:0:99999:7:::
alice:$6$a$aa:19000:0:99999:7:::
ghost:$6$g$gg:19000:0:99999:7:::
";
        let merged = merge(passwd, shadow).unwrap();
        let users: BTreeSet<&str> = merged
            .lines()
            .map(|line| line.split(':').next().unwrap())
            .collect();
        let expected: BTreeSet<&str> = ["root", "alice"].into_iter().collect();
        assert_eq!(users, expected);
    }

    #[test]
    fn test_merge_preserves_other_fields() {
        let passwd = "svc:*:998:998:Service, Room 1:/var/lib/svc:/usr/sbin/nologin:extra:";
        let shadow = "svc:!$6$locked$h:19000::::::";
        let merged = merge(passwd, shadow).unwrap();
        let line = merged.trim_end_matches('\n');
        let input: Vec<&str> = passwd.split(':').collect();
        let fields: Vec<&str> = line.split(':').collect();
        assert_eq!(fields.len(), input.len());
        for (idx, (got, want)) in fields.iter().zip(input.iter()).enumerate() {
            if idx == 1 {
                assert_eq!(*got, "!$6$locked$h");
            } else {
                assert_eq!(got, want);
            }
        }
    }

    #[test]
    fn test_merge_empty_hash_is_kept() {
        let merged = merge(PASSWD, "alice::19000:0:99999:7:::").unwrap();
        assert_eq!(merged, "alice::1000:1000:Alice:/home/alice:/bin/bash\n");
    }

    #[test]
    fn test_merge_is_deterministic() {
        let first = merge(PASSWD, SHADOW).unwrap();
        for _ in 0..5 {
            assert_eq!(merge(PASSWD, SHADOW).unwrap(), first);
        }
    }

    #[test]
    fn test_merge_handles_crlf() {
        let passwd = "alice:x:1000:1000:Alice:/home/alice:/bin/bash\r\n";
        let shadow = "alice:$6$abc$hash1:19000:0:99999:7:::\r\n";
        let merged = merge(passwd, shadow).unwrap();
        assert_eq!(merged, "alice:$6$abc$hash1:1000:1000:Alice:/home/alice:/bin/bash\n");
    }

    #[test]
    fn test_merge_keeps_surrounding_whitespace_in_fields() {
        let passwd = "  alice:x:1000:1000:Alice:/home/alice:/bin/bash  \n";
        let shadow = "  alice:$6$abc$hash1:19000:0:99999:7:::\n";
        let merged = merge(passwd, shadow).unwrap();
        assert_eq!(merged, "  alice:$6$abc$hash1:1000:1000:Alice:/home/alice:/bin/bash  \n");
        assert!(merge(passwd, SHADOW).unwrap_err().is_no_match());
    }

    #[test]
    fn test_report_lists_skipped_account_lines() {
        let passwd = "# header\nalice:x:1000:1000:Alice:/home/alice:/bin/bash\nbroken:x:1\n";
        let report = merge_with_report(passwd, SHADOW).unwrap();
        assert_eq!(report.line_count(), 1);
        assert_eq!(report.skipped.len(), 1);
        let skipped = &report.skipped[0];
        assert_eq!(skipped.listing, Listing::Account);
        assert_eq!(skipped.line_number, 3);
        assert_eq!(
            skipped.reason,
            SkipReason::TooFewFields {
                found: 3,
                required: 7
            }
        );
    }

    #[test]
    fn test_report_content_matches_merge() {
        let report = merge_with_report(PASSWD, SHADOW).unwrap();
        assert_eq!(report.content, merge(PASSWD, SHADOW).unwrap());
        assert_eq!(report.unmatched_accounts, vec!["bob"]);
    }

    #[test]
    fn test_merge_bytes_rejects_invalid_utf8() {
        let err = merge_bytes(&[0xff, 0xfe, b':'], SHADOW.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            UnshadowError::InvalidEncoding {
                listing: Listing::Account
            }
        ));
        assert!(!err.is_no_match());

        let err = merge_bytes(PASSWD.as_bytes(), &[0xc3, 0x28]).unwrap_err();
        assert!(matches!(
            err,
            UnshadowError::InvalidEncoding {
                listing: Listing::Secret
            }
        ));
    }

    #[test]
    fn test_merge_bytes_valid() {
        let merged = merge_bytes(PASSWD.as_bytes(), SHADOW.as_bytes()).unwrap();
        assert_eq!(merged, merge(PASSWD, SHADOW).unwrap());
    }

    #[test]
    fn test_unshadow_files_writes_output() {
        let mut passwd = NamedTempFile::new().unwrap();
        write!(passwd, "{}", PASSWD).unwrap();
        let mut shadow = NamedTempFile::new().unwrap();
        write!(shadow, "{}", SHADOW).unwrap();
        let dir = tempdir().unwrap();
        let output = dir.path().join("combined.txt");

        let report = unshadow_files(passwd.path(), shadow.path(), Some(&output)).unwrap();
        assert_eq!(report.line_count(), 1);
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, report.content);
    }

    #[test]
    fn test_unshadow_files_missing_input() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("passwd");
        let shadow = NamedTempFile::new().unwrap();
        let err = unshadow_files(&missing, shadow.path(), None).unwrap_err();
        assert!(matches!(err, UnshadowError::Io { .. }));
    }

    #[test]
    fn test_unshadow_files_no_match_writes_nothing() {
        let mut passwd = NamedTempFile::new().unwrap();
        write!(passwd, "{}", PASSWD).unwrap();
        let shadow = NamedTempFile::new().unwrap();
        let dir = tempdir().unwrap();
        let output = dir.path().join("combined.txt");

        let err = unshadow_files(passwd.path(), shadow.path(), Some(&output)).unwrap_err();
        assert!(err.is_no_match());
        assert!(!output.exists());
    }
}
