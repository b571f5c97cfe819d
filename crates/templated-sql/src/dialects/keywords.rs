//! Keyword and type tables shared by the dialect presets

/// ANSI SQL keywords
pub const SQL_KEYWORDS: &str = "absolute action add after all allocate alter and any are as asc \
assertion at authorization before begin between both breadth by call cascade cascaded case cast \
catalog check close collate collation column commit condition connect connection constraint \
constraints constructor continue corresponding count create cross cube current current_date \
current_default_transform_group current_transform_group_for_type current_path current_role \
current_time current_timestamp current_user cursor cycle data day deallocate declare default \
deferrable deferred delete depth deref desc describe descriptor deterministic diagnostics \
disconnect distinct do domain drop dynamic each else elseif end equals escape except exception \
exec execute exists exit external fetch first for foreign found from free full function general \
get global go goto grant group grouping handle having hold hour identity if immediate in \
indicator initially inner inout input insert intersect into is isolation join key language last \
lateral leading leave left level like limit local localtime localtimestamp locator loop map match \
method minute modifies module month names natural nesting new next no none not of old on only \
open option or order ordinality out outer output overlaps pad parameter partial path prepare \
preserve primary prior privileges procedure public read reads recursive redo ref references \
referencing relative release repeat resignal restrict result return returns revoke right role \
rollback rollup routine row rows savepoint schema scroll search second section select session \
session_user set sets signal similar size some space specific specifictype sql sqlexception \
sqlstate sqlwarning start state static system_user table temporary then timezone_hour \
timezone_minute to trailing transaction translation treat trigger under undo union unique unnest \
until update usage user using value values view when whenever where while with without work \
write year zone true false null unknown";

/// ANSI SQL type names
pub const SQL_TYPES: &str = "array binary bit boolean char character clob date decimal double \
float int integer interval large national nchar nclob numeric object precision real smallint \
time timestamp varchar varying";

/// Keywords MySQL adds to the ANSI set
pub const MYSQL_KEYWORDS: &str = "accessible algorithm analyze asensitive auto_increment \
autocommit avg avg_row_length binlog btree cache chain change changed checksum coalesce columns \
comment committed concurrent consistent contains convert database databases day_hour \
day_microsecond day_minute day_second delay_key_write delayed delimiter disable discard \
distinctrow div dual dumpfile enable enclosed ends engine engines errors escaped event events \
every explain extended fast field fields flush force found_rows fulltext grants handler hash \
high_priority hosts hour_microsecond hour_minute hour_second ignore index infile insensitive \
insert_method install invoker iterate keys kill linear lines list load lock logs low_priority \
master max max_rows maxvalue min min_rows minute_microsecond minute_second mod mode modify \
no_write_to_binlog offset optimize optionally outfile partition partitions password plugin \
plugins processlist profile profiles purge query quick range rebuild recover regexp rename \
reorganize repair repeatable replace require rlike row_format schemas second_microsecond \
separator serializable server share show slave snapshot spatial sql_big_result \
sql_buffer_result sql_cache sql_calc_found_rows sql_no_cache sql_small_result ssl starting \
straight_join sum tables tablespace terminated triggers truncate uncommitted uninstall unlock \
use utc_date utc_time utc_timestamp variables views warnings xa xor year_month zerofill";

/// Type names MySQL adds to the ANSI set
pub const MYSQL_TYPES: &str = "bigint blob bool datetime enum fixed geometry json linestring \
longblob longtext mediumblob mediumint mediumtext multilinestring multipoint multipolygon point \
polygon serial set tinyblob tinyint tinytext unsigned varbinary";

/// Keywords PostgreSQL adds to the ANSI set
pub const POSTGRES_KEYWORDS: &str = "abort access aggregate also always analyse analyze \
asymmetric backward cache called checkpoint class cluster comment comments committed \
concurrently configuration conflict content conversion copy cost csv database delimiter \
delimiters dictionary disable discard document enable encoding encrypted enum event exclude \
excluding exclusive explain extension family filter following force forward freeze functions \
generated granted greatest handler header ilike immutable implicit import include including \
increment index indexes inherit inherits inline instead isnull label leakproof least listen load \
lock locked logged mapping materialized maxvalue method minvalue mode move nothing notify \
notnull nowait nulls object off offset oids operator options owned owner parallel parser \
partition passing password placing plans policy preceding prepared procedural procedures \
program publication quote range reassign recheck refresh reindex rename repeatable replace \
replica reset restart returning rule schemas security sequence sequences serializable server \
setof share show simple skip snapshot stable standalone statement statistics stdin stdout \
storage strict strip subscription support symmetric sysid tables tablespace temp template text \
ties transform truncate trusted type types unbounded uncommitted unencrypted unlisten unlogged \
vacuum valid validate validator variadic verbose version volatile window wrapper xmlattributes \
xmlconcat xmlelement xmlexists xmlforest xmlnamespaces xmlparse xmlpi xmlroot xmlserialize \
xmltable yes";

/// Type names PostgreSQL adds to the ANSI set
pub const POSTGRES_TYPES: &str = "bigint int8 bigserial serial8 varbit bool box bytea cidr \
circle float8 inet int4 json jsonb line lseg macaddr macaddr8 money pg_lsn point polygon float4 \
int2 smallserial serial2 serial serial4 timetz timestamptz tsquery tsvector txid_snapshot uuid \
xml";

/// Keywords BigQuery adds to the ANSI set
pub const BIGQUERY_KEYWORDS: &str = "assert_rows_modified contains define enum exclude \
following groups hash ignore lookup merge nulls over partition preceding proto qualify range \
respect struct tablesample unbounded window within";

/// Type names BigQuery adds to the ANSI set
pub const BIGQUERY_TYPES: &str = "bignumeric bool bytes datetime float64 geography int64 json \
string struct";

/// Join word lists into one table source
pub fn join(lists: &[&str]) -> String {
    lists.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects::DialectConfig;

    #[test]
    fn test_tables_are_words() {
        for list in [
            SQL_KEYWORDS,
            SQL_TYPES,
            MYSQL_KEYWORDS,
            MYSQL_TYPES,
            POSTGRES_KEYWORDS,
            POSTGRES_TYPES,
            BIGQUERY_KEYWORDS,
            BIGQUERY_TYPES,
        ] {
            for word in list.split_whitespace() {
                assert!(
                    word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
                    "bad table entry {word:?}"
                );
            }
        }
    }

    #[test]
    fn test_common_names_are_not_keywords() {
        let words = DialectConfig::word_set(&join(&[SQL_KEYWORDS, POSTGRES_KEYWORDS]));
        for name in ["MY_TABLE", "MY_COLUMN", "USERS", "FOO"] {
            assert!(!words.contains(name), "{name} should not be a keyword");
        }
    }
}
