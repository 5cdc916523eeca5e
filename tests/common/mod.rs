//! Shared fixtures for the integration tests
//!
//! Small but complete flux documents covering the default configurations:
//! meter readings with time-band collections (R15), daily index readings
//! with subscription data (R151), contract events with qualified
//! before/after readings (C15), invoice lines (F12) and the JSON measure
//! feed (RX5).

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const R15_XML: &str = r#"<R15>
  <En_Tete_Flux>
    <Identifiant_Flux>R15</Identifiant_Flux>
    <Version_XSD>2.3.2</Version_XSD>
    <Identifiant_Emetteur>ENEDIS</Identifiant_Emetteur>
    <Unite_Mesure_Index>kWh</Unite_Mesure_Index>
  </En_Tete_Flux>
  <Corps_Flux>
    <PRM>
      <Id_PRM>11111111111111</Id_PRM>
      <Donnees_Releve>
        <Date_Releve>2024-01-05</Date_Releve>
        <Type_Compteur>CEB</Type_Compteur>
        <Motif_Releve>CYCL</Motif_Releve>
        <Classe_Temporelle_Distributeur>
          <Id_Classe_Temporelle>HP</Id_Classe_Temporelle>
          <Valeur>100</Valeur>
        </Classe_Temporelle_Distributeur>
        <Classe_Temporelle_Distributeur>
          <Id_Classe_Temporelle>HC</Id_Classe_Temporelle>
          <Valeur>50</Valeur>
        </Classe_Temporelle_Distributeur>
        <Classe_Temporelle>
          <Id_Classe_Temporelle>HP</Id_Classe_Temporelle>
          <Valeur>90</Valeur>
        </Classe_Temporelle>
      </Donnees_Releve>
    </PRM>
    <PRM>
      <Id_PRM>22222222222222</Id_PRM>
      <Donnees_Releve>
        <Date_Releve>2024-01-06</Date_Releve>
        <Type_Compteur>CEB</Type_Compteur>
        <Motif_Releve>CYCL</Motif_Releve>
        <Classe_Temporelle_Distributeur>
          <Id_Classe_Temporelle>BASE</Id_Classe_Temporelle>
          <Valeur>250</Valeur>
        </Classe_Temporelle_Distributeur>
      </Donnees_Releve>
    </PRM>
    <PRM>
      <Id_PRM>33333333333333</Id_PRM>
      <Donnees_Releve>
        <Date_Releve>2024-01-07</Date_Releve>
        <Type_Compteur>CEB</Type_Compteur>
      </Donnees_Releve>
    </PRM>
  </Corps_Flux>
</R15>
"#;

pub const C15_XML: &str = r#"<C15>
  <En_Tete_Flux>
    <Identifiant_Flux>C15</Identifiant_Flux>
  </En_Tete_Flux>
  <PRM>
    <Id_PRM>98800000000001</Id_PRM>
    <Segment_Clientele>C5</Segment_Clientele>
    <Situation_Contractuelle>
      <Etat_Contractuel>SERVC</Etat_Contractuel>
      <Structure_Tarifaire>
        <Puissance_Souscrite>6</Puissance_Souscrite>
      </Structure_Tarifaire>
    </Situation_Contractuelle>
    <Evenement_Declencheur>
      <Nature_Evenement>MES</Nature_Evenement>
      <Date_Evenement>2024-03-01</Date_Evenement>
      <Releves>
        <Donnees_Releve>
          <Date_Releve>2024-02-28</Date_Releve>
          <Nature_Index>REEL</Nature_Index>
          <Code_Qualification>1</Code_Qualification>
          <Classe_Temporelle_Distributeur>
            <Id_Classe_Temporelle>HP</Id_Classe_Temporelle>
            <Valeur>1000</Valeur>
          </Classe_Temporelle_Distributeur>
          <Classe_Temporelle_Distributeur>
            <Id_Classe_Temporelle>HC</Id_Classe_Temporelle>
            <Valeur>500</Valeur>
          </Classe_Temporelle_Distributeur>
        </Donnees_Releve>
        <Donnees_Releve>
          <Date_Releve>2024-03-01</Date_Releve>
          <Nature_Index>REEL</Nature_Index>
          <Code_Qualification>2</Code_Qualification>
          <Classe_Temporelle_Distributeur>
            <Id_Classe_Temporelle>HP</Id_Classe_Temporelle>
            <Valeur>1200</Valeur>
          </Classe_Temporelle_Distributeur>
        </Donnees_Releve>
      </Releves>
    </Evenement_Declencheur>
  </PRM>
</C15>
"#;

pub const R151_XML: &str = r#"<R151>
  <En_Tete_Flux>
    <Identifiant_Flux>R151</Identifiant_Flux>
    <Version_XSD>1.2.0</Version_XSD>
    <Identifiant_Emetteur>ERDF</Identifiant_Emetteur>
    <Unite_Mesure_Index>kWh</Unite_Mesure_Index>
  </En_Tete_Flux>
  <PRM>
    <Id_PRM>12345678901234</Id_PRM>
    <Numero_Abonnement>ABO987654321</Numero_Abonnement>
    <Donnees_Releve>
      <Date_Releve>2024-03-01</Date_Releve>
      <Id_Calendrier_Fournisseur>FC000013</Id_Calendrier_Fournisseur>
      <Id_Calendrier_Distributeur>DI000001</Id_Calendrier_Distributeur>
      <Puissance_Maximale>6800</Puissance_Maximale>
      <Classe_Temporelle_Distributeur>
        <Id_Classe_Temporelle>HP</Id_Classe_Temporelle>
        <Valeur>12500</Valeur>
      </Classe_Temporelle_Distributeur>
      <Classe_Temporelle_Distributeur>
        <Id_Classe_Temporelle>HC</Id_Classe_Temporelle>
        <Valeur>8000</Valeur>
      </Classe_Temporelle_Distributeur>
    </Donnees_Releve>
  </PRM>
  <PRM>
    <Id_PRM>22222222222222</Id_PRM>
    <Numero_Abonnement>ABO123456789</Numero_Abonnement>
    <Donnees_Releve>
      <Date_Releve>2024-03-01</Date_Releve>
      <Id_Calendrier_Fournisseur>FC000014</Id_Calendrier_Fournisseur>
      <Id_Calendrier_Distributeur>DI000002</Id_Calendrier_Distributeur>
      <Puissance_Maximale>9000</Puissance_Maximale>
      <Classe_Temporelle_Distributeur>
        <Id_Classe_Temporelle>HPH</Id_Classe_Temporelle>
        <Valeur>6000</Valeur>
      </Classe_Temporelle_Distributeur>
    </Donnees_Releve>
  </PRM>
</R151>
"#;

pub const F12_XML: &str = r#"<F12>
  <En_Tete_Flux>
    <Identifiant_Flux>F12</Identifiant_Flux>
  </En_Tete_Flux>
  <Rappel_En_Tete>
    <Num_Facture>FA2024001</Num_Facture>
    <Date_Facture>2024-02-01</Date_Facture>
  </Rappel_En_Tete>
  <Groupe_Valorise>
    <Id_PRM>44444444444444</Id_PRM>
    <Element_Valorise>
      <Id_EV>F12_A</Id_EV>
      <Acheminement>
        <Quantite>120</Quantite>
        <Montant_HT>34.56</Montant_HT>
      </Acheminement>
    </Element_Valorise>
    <Element_Valorise>
      <Id_EV>F12_B</Id_EV>
      <Acheminement>
        <Quantite>80</Quantite>
        <Montant_HT>12.00</Montant_HT>
      </Acheminement>
    </Element_Valorise>
  </Groupe_Valorise>
</F12>
"#;

pub const RX5_JSON: &str = r#"{
  "header": {
    "codeFlux": "RX5",
    "idDemande": "DEM-001",
    "format": "JSON"
  },
  "mesures": [
    {
      "idPrm": "55555555555555",
      "periode": { "dateDebut": "2024-01-01", "dateFin": "2024-01-31" },
      "contexte": [
        {
          "etapeMetier": "BRUT",
          "grandeur": [
            {
              "calendrier": [
                {
                  "classeTemporelle": [
                    {
                      "idClasseTemporelle": "HP",
                      "libelleClasseTemporelle": "Heures Pleines",
                      "quantite": [ { "quantite": 1234 } ]
                    },
                    {
                      "idClasseTemporelle": "HC",
                      "libelleClasseTemporelle": "Heures Creuses",
                      "quantite": [ { "quantite": 567 } ]
                    }
                  ]
                }
              ]
            }
          ]
        }
      ]
    },
    {
      "idPrm": "66666666666666",
      "periode": { "dateDebut": "2024-01-01", "dateFin": null },
      "contexte": [
        {
          "etapeMetier": "CORRIGE",
          "grandeur": [
            {
              "calendrier": [
                {
                  "classeTemporelle": [
                    {
                      "idClasseTemporelle": "BASE",
                      "libelleClasseTemporelle": "Base",
                      "quantite": [ { "quantite": 9999 } ]
                    }
                  ]
                }
              ]
            }
          ]
        }
      ]
    }
  ]
}
"#;

pub const MALFORMED_XML: &str = "<R15><PRM><Id_PRM>1</PRM></R15>";

/// Write a fixture into `dir` and return its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
